//! Greedy single-pass alignment of search text against a page's run list.
//!
//! The scan keeps exactly one match hypothesis alive at a time. Runs whose
//! text overlaps the start of the remaining search text are accepted and
//! consumed; a run that overlaps somewhere else while a match is underway
//! abandons the attempt and resets, letting a fresh attempt start later in
//! the page. There is no backtracking search tree: cost is one pass over
//! the page's runs.

use crate::align::normalize::{collapse_whitespace, normalize};
use crate::align::overlap::find_overlap;
use crate::config::HighlightConfig;
use crate::runs::TextRun;
use log::debug;

/// The accumulator threaded through a per-segment run scan.
///
/// Each [`step`](MatchState::step) consumes the state and returns its
/// successor, so tests can assert the state after any individual run.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    /// Full normalized search text, restored on reset
    original: String,
    /// Search text with matched prefixes stripped off
    remaining: String,
    /// Run indices accepted by the current attempt
    accepted: Vec<usize>,
    /// Whether a partial (non-tentative) match is underway
    started: bool,
}

impl MatchState {
    /// Start a fresh attempt over an already-normalized search text.
    pub fn new(normalized_search: impl Into<String>) -> Self {
        let original: String = normalized_search.into();
        Self {
            remaining: original.clone(),
            original,
            accepted: Vec::new(),
            started: false,
        }
    }

    /// Search text still unconsumed by the current attempt.
    pub fn remaining(&self) -> &str {
        &self.remaining
    }

    /// Whether a partial match is underway (gates the reset policy).
    pub fn started(&self) -> bool {
        self.started
    }

    /// Run indices accepted by the current attempt so far.
    pub fn accepted(&self) -> &[usize] {
        &self.accepted
    }

    /// Surrender the current attempt's accepted runs (end-of-scan flush).
    ///
    /// Partial credit is deliberate: the search text may span a page
    /// boundary or include content absent from the text layer, so whatever
    /// the live attempt accepted is kept even if `remaining` never emptied.
    pub fn into_accepted(self) -> Vec<usize> {
        self.accepted
    }

    /// Advance the state over one text run.
    ///
    /// Returns the successor state plus any run indices salvaged from an
    /// attempt abandoned at this step (empty unless
    /// [`HighlightConfig::salvage_threshold`] is set and met).
    pub fn step(
        self,
        run_index: usize,
        raw_run_text: &str,
        config: &HighlightConfig,
    ) -> (MatchState, Vec<usize>) {
        let run_text = normalize(raw_run_text);
        if run_text.is_empty() || self.remaining.is_empty() {
            return (self, Vec::new());
        }

        // Token overlap in both directions, then the mid-word fallback for
        // runs split across a word boundary ("infor" + "mation").
        let overlap = find_overlap(&run_text, &self.remaining)
            .or_else(|| find_overlap(&self.remaining, &run_text))
            .map(|o| o.text)
            .or_else(|| split_word_overlap(&run_text, &self.remaining));

        let overlap = match overlap {
            Some(text) => text,
            None => return (self, Vec::new()),
        };

        let at_start = self.remaining.starts_with(&overlap)
            || approximately_at_start(&overlap, &self.remaining, config);
        let whole_remaining = overlap.len() == self.remaining.len();

        if at_start {
            let mut next = self;
            next.accepted.push(run_index);
            next.remaining = consume(&next.remaining, &overlap);
            if !whole_remaining {
                // Partial consumption: a real match is underway. A full
                // consumption in one run stays tentative.
                next.started = true;
            }
            (next, Vec::new())
        } else if self.started && self.remaining.len() > 1 {
            debug!(
                "abandoning match attempt at run {} ({} runs accepted)",
                run_index,
                self.accepted.len()
            );
            let salvaged = match config.salvage_threshold {
                Some(threshold) if self.consumed_fraction() >= threshold => self.accepted.clone(),
                _ => Vec::new(),
            };
            (MatchState::new(self.original), salvaged)
        } else {
            (self, Vec::new())
        }
    }

    /// Fraction of the original search text consumed so far.
    fn consumed_fraction(&self) -> f32 {
        if self.original.is_empty() {
            return 0.0;
        }
        1.0 - self.remaining.len() as f32 / self.original.len() as f32
    }
}

/// Whether an overlap counts as "approximately at the start" of the
/// remaining text.
///
/// Short overlaps never qualify: anything at or under the token floor must
/// match the exact start, which prevents spurious short-text matches. Longer
/// overlaps may sit within the first quarter (by default) of the remaining
/// text, absorbing a bounded amount of leading noise such as OCR artifacts.
/// An unbounded tolerance would match unrelated text.
fn approximately_at_start(overlap: &str, remaining: &str, config: &HighlightConfig) -> bool {
    if overlap.split_whitespace().count() <= config.fuzzy_token_floor {
        return false;
    }

    let window = (remaining.len() as f32 * config.start_tolerance).floor() as usize;
    match remaining.find(overlap) {
        Some(index) => index <= window,
        None => false,
    }
}

/// Remove the first occurrence of `overlap` from `remaining`.
fn consume(remaining: &str, overlap: &str) -> String {
    collapse_whitespace(&remaining.replacen(overlap, "", 1))
}

/// Overlap for a run split mid-word across the run boundary.
///
/// Token comparison cannot see "infor" inside "information"; a run that is
/// a prefix of the remaining text (or the reverse) is matched directly.
/// Single characters are excluded: a lone "a" would eat into any word
/// starting with it.
fn split_word_overlap(run_text: &str, remaining: &str) -> Option<String> {
    if run_text.len() < 2 {
        return None;
    }
    if remaining.starts_with(run_text) {
        Some(run_text.to_string())
    } else if run_text.starts_with(remaining) {
        Some(remaining.to_string())
    } else {
        None
    }
}

/// Align one search segment against a page's run list.
///
/// Returns the indices of accepted runs, in scan order. An empty result is
/// simply "nothing to highlight", never an error.
pub fn align_segment(segment: &str, runs: &[TextRun], config: &HighlightConfig) -> Vec<usize> {
    let original = normalize(segment);
    if original.is_empty() {
        return Vec::new();
    }

    let mut state = MatchState::new(original);
    let mut accepted = Vec::new();

    for (index, run) in runs.iter().enumerate() {
        let (next, salvaged) = state.step(index, &run.text, config);
        accepted.extend(salvaged);
        state = next;
    }

    accepted.extend(state.into_accepted());
    accepted
}

/// Align a full search text against a page's run list.
///
/// Newline-separated segments are aligned independently against the same
/// run list and their accepted indices unioned, since extraction pipelines
/// cite multi-line passages as one source string.
pub fn align(source_text: &str, runs: &[TextRun], config: &HighlightConfig) -> Vec<usize> {
    let mut accepted = Vec::new();
    for segment in source_text.split('\n') {
        accepted.extend(align_segment(segment, runs, config));
    }
    accepted
}
