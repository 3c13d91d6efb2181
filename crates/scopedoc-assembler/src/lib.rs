//! Document assembly for Scopedoc.
//!
//! The [`Assembler`] is the single writer of the persisted scope document.
//! On every merge it decides, per named region, whether the region needs
//! rebuilding, splices fresh content in through the marker engine, and
//! persists the result only when it actually changed.
//!
//! # Lifecycle
//!
//! A document moves through the states reported by [`DocumentState`]:
//! nothing persisted yet, template rendered but regions still empty, fully
//! assembled, and assembled with user edits folded in. Whatever the state,
//! a merge always succeeds: when region markers or anchor headings have
//! gone missing the assembler degrades to inserting at an anchor and
//! finally to appending at the end of the document.
//!
//! # Example
//!
//! ```
//! use scopedoc_assembler::{Assembler, MergeRequest};
//! use scopedoc_model::{AssetData, TemplateBlock, TierCatalog};
//! use scopedoc_store::MemoryStore;
//!
//! let template = vec![
//!     TemplateBlock::Paragraph { text: "--START IN-SCOPE----END IN-SCOPE--".to_owned() },
//!     TemplateBlock::Paragraph { text: "--START REWARDS----END REWARDS--".to_owned() },
//! ];
//! let mut assembler = Assembler::new(Box::new(MemoryStore::new()), template);
//! let outcome = assembler.merge(&MergeRequest {
//!     domain: "example.com",
//!     assets: &AssetData::default(),
//!     catalog: &TierCatalog::default(),
//!     selected_tier: None,
//!     edited_document: None,
//! });
//! assert!(outcome.persisted);
//! assert!(outcome.html.contains("example.com"));
//! ```

mod assembler;
mod normalize;
mod presentation;

pub use assembler::{Assembler, DocumentState, MergeOutcome, MergeRequest};
pub use normalize::{normalize, normalized_eq};
pub use presentation::{Presentation, RecordingPresentation};
