//! The rendering-engine boundary.
//!
//! The highlight engine does not render PDFs. It consumes the output of an
//! external rendering engine (pdfium, pdf.js, a test double) through the two
//! traits here: a document-level [`RenderEngine`] that hands out pages, and
//! a per-page [`PageHandle`] exposing the page's text content stream and its
//! native/rendered dimensions.
//!
//! Page readiness is data, not timing: `rendered_size` returns `None` until
//! the page's pixel surface exists, and callers defer or skip based on that
//! instead of racing a timer against the render pass.

use crate::error::{Error, Result};
use crate::runs::TextRun;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A document loaded into a rendering engine.
pub trait RenderEngine {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Get a handle for a 1-based page number, or `None` if out of range.
    fn page(&self, page_number: usize) -> Option<&dyn PageHandle>;
}

/// One page of a document, possibly already rendered to pixels.
pub trait PageHandle {
    /// The page's text runs in content-stream order.
    fn text_runs(&self) -> &[TextRun];

    /// Native (unscaled) viewport size in user-space units.
    fn native_size(&self) -> (f32, f32);

    /// Rendered canvas size in pixels, or `None` if the page has not been
    /// rendered yet.
    fn rendered_size(&self) -> Option<(f32, f32)>;
}

/// An in-memory page backed by literal runs.
///
/// Used by tests and the fixture tooling; real deployments implement
/// [`PageHandle`] over their rendering engine instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticPage {
    /// Text runs in content-stream order
    pub runs: Vec<TextRun>,
    /// Native viewport width in user-space units
    pub native_width: f32,
    /// Native viewport height in user-space units
    pub native_height: f32,
    /// Rendered canvas width in pixels, if rendered
    #[serde(default)]
    pub rendered_width: Option<f32>,
    /// Rendered canvas height in pixels, if rendered
    #[serde(default)]
    pub rendered_height: Option<f32>,
}

impl StaticPage {
    /// Create an unrendered page with the given runs and native size.
    pub fn new(runs: Vec<TextRun>, native: (f32, f32)) -> Self {
        Self {
            runs,
            native_width: native.0,
            native_height: native.1,
            rendered_width: None,
            rendered_height: None,
        }
    }

    /// Mark the page as rendered at the given pixel size.
    pub fn with_rendered_size(mut self, width: f32, height: f32) -> Self {
        self.rendered_width = Some(width);
        self.rendered_height = Some(height);
        self
    }
}

impl PageHandle for StaticPage {
    fn text_runs(&self) -> &[TextRun] {
        &self.runs
    }

    fn native_size(&self) -> (f32, f32) {
        (self.native_width, self.native_height)
    }

    fn rendered_size(&self) -> Option<(f32, f32)> {
        match (self.rendered_width, self.rendered_height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }
}

/// An in-memory document: a list of [`StaticPage`]s.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticEngine {
    /// Pages in document order (index 0 is page 1)
    pub pages: Vec<StaticPage>,
}

impl StaticEngine {
    /// Create an engine over the given pages.
    pub fn new(pages: Vec<StaticPage>) -> Self {
        Self { pages }
    }

    /// Parse an engine from a JSON fixture string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load an engine from a JSON fixture file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Get a page by 1-based number, failing loudly on bad indices.
    ///
    /// The trait accessor returns `Option` because the highlight path skips
    /// missing pages silently; fixture tooling wants the error instead.
    pub fn page_strict(&self, page_number: usize) -> Result<&StaticPage> {
        page_number
            .checked_sub(1)
            .and_then(|idx| self.pages.get(idx))
            .ok_or(Error::PageOutOfRange {
                page: page_number,
                count: self.pages.len(),
            })
    }
}

impl RenderEngine for StaticEngine {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, page_number: usize) -> Option<&dyn PageHandle> {
        page_number
            .checked_sub(1)
            .and_then(|idx| self.pages.get(idx))
            .map(|p| p as &dyn PageHandle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_page_engine() -> StaticEngine {
        StaticEngine::new(vec![StaticPage::new(
            vec![TextRun::new(
                "hello",
                [1.0, 0.0, 0.0, 1.0, 10.0, 20.0],
                30.0,
                12.0,
            )],
            (612.0, 792.0),
        )])
    }

    #[test]
    fn test_page_lookup_is_one_based() {
        let engine = one_page_engine();
        assert!(engine.page(1).is_some());
        assert!(engine.page(0).is_none());
        assert!(engine.page(2).is_none());
    }

    #[test]
    fn test_page_strict_reports_range() {
        let engine = one_page_engine();
        assert!(engine.page_strict(1).is_ok());
        let err = engine.page_strict(3).unwrap_err();
        assert!(matches!(
            err,
            Error::PageOutOfRange { page: 3, count: 1 }
        ));
    }

    #[test]
    fn test_fixture_round_trip() {
        let engine = one_page_engine();
        let json = serde_json::to_string(&engine).unwrap();
        let back = StaticEngine::from_json(&json).unwrap();
        assert_eq!(back.page_count(), 1);
        assert_eq!(back.pages[0].runs[0].text, "hello");
        assert!(back.pages[0].rendered_size().is_none());
    }

    #[test]
    fn test_fixture_rejects_malformed_json() {
        assert!(StaticEngine::from_json("{not json").is_err());
    }
}
