//! Declarative document template blocks.

use serde::Deserialize;

/// One unit of static template content, in document reading order.
///
/// Paragraph text is inserted literally, so it may carry inline markup and
/// the `--START X--`/`--END X--` marker pairs that seed the document's
/// named regions.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TemplateBlock {
    /// A paragraph of literal text.
    Paragraph {
        /// Paragraph content.
        text: String,
    },
    /// An unordered list.
    List {
        /// One entry per list item.
        items: Vec<String>,
    },
}
