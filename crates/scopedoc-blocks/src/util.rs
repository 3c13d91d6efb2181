//! Shared fragment-building helpers.

use std::fmt::Write;

/// Visible spacer between sibling entries and sections.
pub const SPACER: &str = "<p><br></p>";

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Join non-empty fragments with the spacer; never leading or trailing.
#[must_use]
pub fn join_fragments(fragments: &[String]) -> String {
    fragments
        .iter()
        .filter(|fragment| !fragment.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(SPACER)
}

/// A paragraph holding a link whose text is the URL itself.
#[must_use]
pub fn link_paragraph(url: &str) -> String {
    let url = escape_html(url.trim());
    let mut out = String::new();
    write!(out, r#"<p><a href="{url}">{url}</a></p>"#).unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_join_fragments_skips_empty() {
        let fragments = vec![
            "<p>a</p>".to_owned(),
            String::new(),
            "<p>b</p>".to_owned(),
        ];
        assert_eq!(join_fragments(&fragments), "<p>a</p><p><br></p><p>b</p>");
    }

    #[test]
    fn test_join_fragments_no_leading_or_trailing_spacer() {
        let fragments = vec![String::new(), "<p>only</p>".to_owned(), String::new()];
        assert_eq!(join_fragments(&fragments), "<p>only</p>");
        assert_eq!(join_fragments(&[]), "");
    }

    #[test]
    fn test_link_paragraph() {
        assert_eq!(
            link_paragraph("https://example.com"),
            r#"<p><a href="https://example.com">https://example.com</a></p>"#
        );
    }
}
