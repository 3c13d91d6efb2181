//! Block builders and template rendering for Scopedoc documents.
//!
//! Builders are pure functions from model data to HTML fragment strings.
//! They share two conventions:
//!
//! - **Omission**: empty input produces an empty string, never a
//!   heading-only fragment. Sections for which the provider had nothing
//!   simply do not appear.
//! - **Spacing**: sibling entries and sections are joined with the visible
//!   spacer [`SPACER`], which never leads or trails a fragment.
//!
//! The two region-producing builders ([`assets_region`] and
//! [`rewards_block`]) wrap their output in `--START--`/`--END--` markers so
//! the result can be handed directly to the marker engine.

mod assets;
mod rewards;
mod template;
mod util;

pub use assets::{api_block, assets_region, mobile_block, website_block};
pub use rewards::{MASKED_RANGE, rewards_block};
pub use template::render_template;
pub use util::{SPACER, escape_html};
