//! Template rendering: declarative blocks to the initial document HTML.

use std::fmt::Write;

use scopedoc_model::TemplateBlock;

/// Render template blocks to HTML, in input order.
///
/// Paragraph text is inserted literally, so marker pairs written in the
/// template (`--START IN-SCOPE----END IN-SCOPE--`) become the document's
/// empty named regions. Output is trimmed of surrounding whitespace.
#[must_use]
pub fn render_template(blocks: &[TemplateBlock]) -> String {
    let mut out = String::with_capacity(1024);

    for block in blocks {
        match block {
            TemplateBlock::Paragraph { text } => {
                write!(out, "<p>{text}</p>").unwrap();
            }
            TemplateBlock::List { items } => {
                out.push_str("<ul>");
                for item in items {
                    write!(out, "<li>{item}</li>").unwrap();
                }
                out.push_str("</ul>");
            }
        }
    }

    out.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn paragraph(text: &str) -> TemplateBlock {
        TemplateBlock::Paragraph {
            text: text.to_owned(),
        }
    }

    #[test]
    fn test_render_paragraphs_in_order() {
        let blocks = vec![paragraph("first"), paragraph("second")];
        assert_eq!(render_template(&blocks), "<p>first</p><p>second</p>");
    }

    #[test]
    fn test_render_list() {
        let blocks = vec![TemplateBlock::List {
            items: vec!["one".to_owned(), "two".to_owned()],
        }];
        assert_eq!(render_template(&blocks), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn test_render_keeps_markers_literal() {
        let blocks = vec![paragraph("--START IN-SCOPE----END IN-SCOPE--")];
        assert_eq!(
            render_template(&blocks),
            "<p>--START IN-SCOPE----END IN-SCOPE--</p>"
        );
    }

    #[test]
    fn test_render_empty_input() {
        assert_eq!(render_template(&[]), "");
    }

    #[test]
    fn test_render_trims_output() {
        let blocks = vec![paragraph("  padded  ")];
        // Surrounding whitespace inside the paragraph is kept; only the
        // fragment edges are trimmed (nothing to trim here)
        assert_eq!(render_template(&blocks), "<p>  padded  </p>");
    }
}
