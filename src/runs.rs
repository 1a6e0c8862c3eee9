//! Positioned text runs and their extraction from a rendered page.
//!
//! A text run is one contiguous glyph-string item emitted by a PDF engine's
//! text-content extraction: a word fragment, a whole word, or several words,
//! together with its placement transform and box size in user-space units.
//! Runs are produced fresh per page render and discarded once alignment for
//! that page completes.

use crate::engine::PageHandle;
use crate::project::PageMetrics;
use log::debug;
use serde::{Deserialize, Serialize};

/// One item from a rendered page's text content stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Raw glyph string as emitted by the PDF engine
    pub text: String,
    /// 2D affine transform `[a, b, c, d, e, f]` placing the run's glyph
    /// origin in PDF user-space. Only the translation components `e` and
    /// `f` are consumed; rotation and skew are not modeled.
    pub transform: [f32; 6],
    /// Bounding-box width in user-space units
    pub width: f32,
    /// Bounding-box height in user-space units
    pub height: f32,
}

impl TextRun {
    /// Create a new text run.
    pub fn new(text: impl Into<String>, transform: [f32; 6], width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            transform,
            width,
            height,
        }
    }

    /// Horizontal translation component (`e`) of the placement transform.
    pub fn tx(&self) -> f32 {
        self.transform[4]
    }

    /// Vertical translation component (`f`) of the placement transform.
    pub fn ty(&self) -> f32 {
        self.transform[5]
    }
}

/// The ordered run list for one page, plus the dimensions needed to project
/// run geometry into rendered pixel space.
#[derive(Debug, Clone)]
pub struct PageRuns {
    /// Text runs in content-stream order
    pub runs: Vec<TextRun>,
    /// Native and rendered page dimensions
    pub metrics: PageMetrics,
}

/// Extract the ordered text runs and page metrics from a rendered page.
///
/// Returns `None` when the page has no rendered pixel surface yet (or a
/// degenerate zero-sized one); the caller skips highlighting for that page
/// silently, since highlighting is a visual enhancement and never required
/// content. Read-only: the page handle is only queried.
pub fn extract_runs(page: &dyn PageHandle) -> Option<PageRuns> {
    let rendered = match page.rendered_size() {
        Some(size) => size,
        None => {
            debug!("page has no rendered surface yet, skipping highlight");
            return None;
        }
    };

    let metrics = PageMetrics::new(page.native_size(), rendered);
    if !metrics.is_valid() {
        debug!("rendered surface has zero dimensions, skipping highlight");
        return None;
    }

    Some(PageRuns {
        runs: page.text_runs().to_vec(),
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StaticPage;

    fn run(text: &str) -> TextRun {
        TextRun::new(text, [1.0, 0.0, 0.0, 1.0, 0.0, 0.0], 10.0, 10.0)
    }

    #[test]
    fn test_translation_accessors() {
        let r = TextRun::new("x", [1.0, 0.0, 0.0, 1.0, 42.0, 99.0], 5.0, 5.0);
        assert_eq!(r.tx(), 42.0);
        assert_eq!(r.ty(), 99.0);
    }

    #[test]
    fn test_extract_runs_from_rendered_page() {
        let page = StaticPage::new(vec![run("hello"), run("world")], (612.0, 792.0))
            .with_rendered_size(306.0, 396.0);

        let extracted = extract_runs(&page).expect("rendered page should extract");
        assert_eq!(extracted.runs.len(), 2);
        assert_eq!(extracted.metrics.scale_x(), 2.0);
    }

    #[test]
    fn test_extract_runs_skips_unrendered_page() {
        let page = StaticPage::new(vec![run("hello")], (612.0, 792.0));
        assert!(extract_runs(&page).is_none());
    }

    #[test]
    fn test_extract_runs_skips_zero_sized_surface() {
        let page =
            StaticPage::new(vec![run("hello")], (612.0, 792.0)).with_rendered_size(0.0, 0.0);
        assert!(extract_runs(&page).is_none());
    }
}
