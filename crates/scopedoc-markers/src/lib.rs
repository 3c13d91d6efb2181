//! Marker-delimited region matching for Scopedoc documents.
//!
//! A *region* is a named span inside an HTML string delimited by the literal
//! markers `--START <NAME>--` and `--END <NAME>--`. The document around and
//! inside the markers is opaque to this crate; callers generate region
//! content elsewhere and splice it in here.
//!
//! Matching rules:
//!
//! - Region names match case-insensitively; the marker punctuation is exact.
//! - Only the first occurrence of a region is considered. Duplicate region
//!   names in one document are a caller error; later occurrences are left
//!   untouched.
//! - The interior match is non-greedy, so a span always ends at the nearest
//!   `--END--` marker.
//! - Replacement consumes a single `<p>`/`<div>` wrapper when it encloses
//!   exactly the span, and absorbs trailing whitespace and `<br>` artifacts
//!   after the span. Repeated rebuilds therefore neither orphan wrapper tags
//!   nor accumulate blank lines.
//! - Nothing here panics on malformed input; an unmatched or half-formed
//!   marker pair is simply "not found".
//!
//! # Example
//!
//! ```
//! use scopedoc_markers::{extract_region, replace_region, wrap_region};
//!
//! let doc = "<p>intro</p><p>--START IN-SCOPE--old--END IN-SCOPE--</p>";
//! let fresh = wrap_region("IN-SCOPE", "<p>new content</p>");
//! let merged = replace_region(doc, "IN-SCOPE", &fresh);
//!
//! assert_eq!(extract_region(&merged, "IN-SCOPE"), Some(fresh.as_str()));
//! assert!(merged.starts_with("<p>intro</p>"));
//! ```

use std::ops::Range;

use regex::Regex;

/// Region holding the generated in-scope asset blocks.
pub const IN_SCOPE: &str = "IN-SCOPE";

/// Region holding the generated reward-tier block.
pub const REWARDS: &str = "REWARDS";

/// Opening marker for a named region.
#[must_use]
pub fn start_marker(name: &str) -> String {
    format!("--START {name}--")
}

/// Closing marker for a named region.
#[must_use]
pub fn end_marker(name: &str) -> String {
    format!("--END {name}--")
}

/// Wrap generated content in its region markers.
#[must_use]
pub fn wrap_region(name: &str, interior: &str) -> String {
    format!("--START {name}--{interior}--END {name}--")
}

/// Pattern for the bare span, markers inclusive, without trailing artifacts.
fn span_pattern(name: &str) -> String {
    let name = regex::escape(name);
    format!("(?is)--START {name}--.*?--END {name}--")
}

/// Trailing whitespace and `<br>` artifacts absorbed by a replacement.
const TRAILING: &str = r"(?:\s|<br\s*/?>)*";

/// Pattern for the span plus absorbed trailing artifacts.
fn splice_pattern(name: &str) -> String {
    let name = regex::escape(name);
    format!("(?is)--START {name}--.*?--END {name}--{TRAILING}")
}

/// Pattern for a span enclosed exactly by one paragraph-like wrapper.
///
/// Only whitespace may sit between the wrapper tags and the markers, so a
/// wrapper that also holds user text is never consumed.
fn wrapped_pattern(name: &str) -> String {
    let name = regex::escape(name);
    format!(
        r"(?is)<(?:p|div)\b[^>]*>\s*--START {name}--.*?--END {name}--\s*</(?:p|div)\s*>{TRAILING}"
    )
}

/// Locate the splice range for `name`: the first span, widened to its
/// enclosing wrapper and trailing artifacts where applicable.
fn find_splice_range(doc: &str, name: &str) -> Option<Range<usize>> {
    let plain = Regex::new(&splice_pattern(name)).ok()?.find(doc)?;

    // A wrapped match only wins when it encloses the first span; a wrapper
    // around some later duplicate must not redirect the splice.
    let wrapped = Regex::new(&wrapped_pattern(name))
        .ok()
        .and_then(|re| re.find(doc))
        .filter(|w| w.start() <= plain.start() && plain.end() <= w.end());

    Some(wrapped.map_or_else(|| plain.range(), |w| w.range()))
}

/// Extract the first region named `name`, markers inclusive.
///
/// Returns `None` when the marker pair is absent or malformed.
#[must_use]
pub fn extract_region<'d>(doc: &'d str, name: &str) -> Option<&'d str> {
    let span = Regex::new(&span_pattern(name)).ok()?.find(doc)?;
    Some(&doc[span.range()])
}

/// Whether `doc` contains a well-formed region named `name`.
#[must_use]
pub fn contains_region(doc: &str, name: &str) -> bool {
    extract_region(doc, name).is_some()
}

/// Extract the interior of the first region named `name`, markers excluded.
///
/// Returns `None` when the marker pair is absent or malformed.
#[must_use]
pub fn region_interior<'d>(doc: &'d str, name: &str) -> Option<&'d str> {
    let span = extract_region(doc, name)?;
    // The matched marker text differs from the canonical one at most in
    // ASCII case, so the canonical lengths apply.
    span.get(start_marker(name).len()..span.len() - end_marker(name).len())
}

/// Replace the first region named `name` with `replacement`.
///
/// `replacement` must carry its own `--START--`/`--END--` markers; it is
/// spliced in verbatim. Returns `None` when no region span was found, in
/// which case the caller decides where to insert instead.
#[must_use]
pub fn try_replace_region(doc: &str, name: &str, replacement: &str) -> Option<String> {
    let range = find_splice_range(doc, name)?;

    let mut out = String::with_capacity(doc.len() - range.len() + replacement.len());
    out.push_str(&doc[..range.start]);
    out.push_str(replacement);
    out.push_str(&doc[range.end..]);
    Some(out)
}

/// Replace the first region named `name`, or return `doc` unchanged.
///
/// The missing-region case is recoverable (the caller may append the region
/// elsewhere), so it is logged as a warning rather than surfaced as an
/// error.
#[must_use]
pub fn replace_region(doc: &str, name: &str, replacement: &str) -> String {
    match try_replace_region(doc, name, replacement) {
        Some(out) => out,
        None => {
            tracing::warn!(region = %name, "region markers not found; document left unchanged");
            doc.to_owned()
        }
    }
}
