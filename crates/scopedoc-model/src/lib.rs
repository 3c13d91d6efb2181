//! Data model for Scopedoc.
//!
//! This crate holds the plain data types exchanged between the wizard's
//! collaborators and the merge engine:
//!
//! - Asset provider payloads ([`AssetData`], [`MobileDetails`], [`ApiDetails`])
//! - The reward-tier catalog ([`TierCatalog`], [`Tier`])
//! - Declarative document templates ([`TemplateBlock`])
//!
//! All types are serde-deserializable. Asset payloads mirror the backend's
//! wire spellings (`mobileDetails`, `suggestedApis`, `alternatives.iOS`),
//! so a provider response can be fed to the merge engine without a mapping
//! layer in between.

mod assets;
mod rewards;
mod template;

pub use assets::{Alternatives, Api, ApiDetails, AssetData, MobileApp, MobileDetails, Platform};
pub use rewards::{Examples, Tier, TierCatalog};
pub use template::TemplateBlock;
