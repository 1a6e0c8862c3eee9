//! Fuzzy alignment of search text against a page's text runs.
//!
//! Extracted text rarely matches the PDF text layer byte-for-byte: different
//! normalization, OCR artifacts, and words split across text runs all break
//! strict substring search. This module aligns a search string against the
//! ordered run list with a greedy, self-resetting, single-pass scan:
//! - [`normalize`] lowercases and strips punctuation before any comparison
//! - [`find_overlap`] finds the longest common contiguous token run
//! - [`MatchState`] threads the scan as an explicit per-step reducer
//! - [`align`] / [`align_segment`] drive the scan and return accepted run
//!   indices

mod aligner;
mod normalize;
mod overlap;

pub use aligner::{align, align_segment, MatchState};
pub use normalize::normalize;
pub use overlap::{find_overlap, Overlap, OverlapPosition};
