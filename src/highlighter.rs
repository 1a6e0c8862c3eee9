//! The highlight pass: extraction → alignment → projection → composition.
//!
//! [`Highlighter::highlight_page`] is the crate's single operation: given a
//! page number and the search targets citing it, it locates the matching
//! text runs, projects them to pixel rectangles, and hands the set to the
//! compositor. It is idempotent and safe to call repeatedly; every call
//! replaces the page's previous overlay.
//!
//! Passes are keyed by a per-page generation counter. When targets change
//! while an earlier pass's results are still in flight (computed but not
//! committed), the stale pass is rejected at commit time instead of being
//! composited over the newer one.

use crate::align::align;
use crate::compositor::Compositor;
use crate::config::HighlightConfig;
use crate::engine::RenderEngine;
use crate::geometry::Rect;
use crate::project::project_run;
use crate::runs::extract_runs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One highlight request: a page and the text to locate on it.
///
/// The text may contain embedded line breaks; each line is aligned
/// independently and the resulting rectangles unioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTarget {
    /// 1-based page number the text was cited from
    pub page_number: usize,
    /// The text to locate on that page
    pub source_text: String,
}

impl SearchTarget {
    /// Create a new search target.
    pub fn new(page_number: usize, source_text: impl Into<String>) -> Self {
        Self {
            page_number,
            source_text: source_text.into(),
        }
    }
}

/// Token identifying one highlight pass over one page.
///
/// A token captured before a newer pass began is stale and will be rejected
/// at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassToken {
    page_number: usize,
    generation: u64,
}

/// Drives highlight passes against a rendering engine.
pub struct Highlighter<'a, C: Compositor> {
    engine: &'a dyn RenderEngine,
    compositor: C,
    config: HighlightConfig,
    generations: HashMap<usize, u64>,
}

impl<'a, C: Compositor> Highlighter<'a, C> {
    /// Create a highlighter with the default configuration.
    pub fn new(engine: &'a dyn RenderEngine, compositor: C) -> Self {
        Self::with_config(engine, compositor, HighlightConfig::default())
    }

    /// Create a highlighter with an explicit configuration.
    pub fn with_config(
        engine: &'a dyn RenderEngine,
        compositor: C,
        config: HighlightConfig,
    ) -> Self {
        Self {
            engine,
            compositor,
            config,
            generations: HashMap::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// The compositor holding the painted overlays.
    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    /// Run a full highlight pass for one page.
    ///
    /// Targets citing other pages are ignored. Returns the number of
    /// rectangles painted; zero means nothing matched or the page has no
    /// rendered surface yet, neither of which is an error.
    pub fn highlight_page(&mut self, page_number: usize, targets: &[SearchTarget]) -> usize {
        let token = self.begin_pass(page_number);
        let rects = self.compute_page(page_number, targets);
        if self.commit_pass(&token, &rects) {
            rects.len()
        } else {
            0
        }
    }

    /// Start a new pass for a page, superseding any pass still in flight.
    pub fn begin_pass(&mut self, page_number: usize) -> PassToken {
        let generation = self.generations.entry(page_number).or_insert(0);
        *generation += 1;
        PassToken {
            page_number,
            generation: *generation,
        }
    }

    /// Compute the highlight rectangles for a page without painting them.
    ///
    /// All failure modes are absorbed here: a missing or unrendered page,
    /// empty search text, and zero lexical overlap each produce an empty
    /// set, never an error.
    pub fn compute_page(&self, page_number: usize, targets: &[SearchTarget]) -> Vec<Rect> {
        let page = match self.engine.page(page_number) {
            Some(page) => page,
            None => {
                debug!("page {} unavailable, skipping highlight", page_number);
                return Vec::new();
            }
        };

        let page_runs = match extract_runs(page) {
            Some(runs) => runs,
            None => return Vec::new(),
        };

        let mut rects = Vec::new();
        for target in targets.iter().filter(|t| t.page_number == page_number) {
            for index in align(&target.source_text, &page_runs.runs, &self.config) {
                rects.push(project_run(&page_runs.runs[index], &page_runs.metrics));
            }
        }

        if self.config.pixel_ratio != 1.0 {
            for rect in &mut rects {
                *rect = rect.scaled_down(self.config.pixel_ratio);
            }
        }

        rects
    }

    /// Commit a computed pass, unless a newer pass has superseded it.
    ///
    /// Returns `false` and discards the rects when the token is stale.
    /// Committing an empty set clears the page's overlay.
    pub fn commit_pass(&mut self, token: &PassToken, rects: &[Rect]) -> bool {
        let current = self.generations.get(&token.page_number).copied().unwrap_or(0);
        if token.generation != current {
            debug!(
                "dropping stale highlight pass for page {} (generation {} < {})",
                token.page_number, token.generation, current
            );
            return false;
        }
        self.compositor.paint(token.page_number, rects);
        true
    }
}
