//! Text normalization applied before any comparison.
//!
//! Extracted text rarely matches a PDF's text layer byte-for-byte: case,
//! punctuation, and whitespace all differ between an extraction pipeline's
//! output and the raw content stream. Every string entering the aligner goes
//! through [`normalize`] first so comparisons see only lowercase tokens.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex matching punctuation (anything that is not a word character or whitespace)
    static ref RE_PUNCT: Regex = Regex::new(r"[^\w\s]").unwrap();

    /// Regex for collapsing whitespace runs
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize text for comparison: lowercase, strip punctuation, collapse
/// whitespace runs to single spaces, trim.
///
/// # Examples
///
/// ```
/// use pdf_highlight::align::normalize;
///
/// assert_eq!(normalize("Total:  $1,204.50"), "total 120450");
/// assert_eq!(normalize("  Hello, World!  "), "hello world");
/// assert_eq!(normalize("..."), "");
/// ```
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = RE_PUNCT.replace_all(&lower, "");
    collapse_whitespace(&stripped)
}

/// Collapse whitespace runs to single spaces and trim.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text.trim(), " ").to_string()
}
