//! # PDF Highlight
//!
//! Text-to-coordinate highlight engine for rendered PDF pages.
//!
//! Given a page number and a block of extracted text (a citation, a quoted
//! sentence, an OCR snippet), this crate locates the corresponding text runs
//! in the page's content stream, projects their PDF user-space geometry into
//! rendered pixel space, and composites the resulting rectangles as a
//! per-page overlay.
//!
//! Extracted text almost never matches the text layer byte-for-byte, so the
//! core of the crate is a fuzzy aligner: a greedy, self-resetting, one-pass
//! scan over the page's runs that tolerates whitespace and punctuation
//! differences, runs split mid-word, partial-match fragments, and a bounded
//! amount of leading noise.
//!
//! ## Architecture
//!
//! - [`engine`] — the rendering-engine boundary (pdfium, pdf.js, a test
//!   double) exposing text runs and page dimensions
//! - [`runs`] — positioned text runs and their extraction from a page
//! - [`align`] — normalization, token overlap, and the match-state reducer
//! - [`project`] — user-space → pixel-space coordinate projection
//! - [`compositor`] — per-page overlay painting behind a one-method trait
//! - [`highlighter`] — the pass driver with generation-keyed cancellation
//!
//! Highlighting is a visual enhancement: every failure mode (unrendered
//! page, no lexical overlap, empty inputs, stale pass) is absorbed locally
//! and degrades to "nothing to highlight".
//!
//! ## Quick Start
//!
//! ```
//! use pdf_highlight::engine::{StaticEngine, StaticPage};
//! use pdf_highlight::{Highlighter, OverlayStore, SearchTarget, TextRun};
//!
//! let engine = StaticEngine::new(vec![StaticPage::new(
//!     vec![TextRun::new(
//!         "the quick brown fox",
//!         [1.0, 0.0, 0.0, 1.0, 100.0, 700.0],
//!         200.0,
//!         12.0,
//!     )],
//!     (612.0, 792.0),
//! )
//! .with_rendered_size(612.0, 792.0)]);
//!
//! let mut highlighter = Highlighter::new(&engine, OverlayStore::new());
//! let painted = highlighter.highlight_page(1, &[SearchTarget::new(1, "quick brown fox")]);
//!
//! assert_eq!(painted, 1);
//! let overlay = highlighter.compositor().overlay(1).unwrap();
//! assert_eq!(overlay[0].x, 100.0);
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Geometric primitives
pub mod geometry;

// Rendering-engine boundary
pub mod engine;

// Text runs and extraction
pub mod runs;

// Fuzzy alignment
pub mod align;

// Coordinate projection
pub mod project;

// Overlay composition
pub mod compositor;

// Pass orchestration
pub mod highlighter;

pub use compositor::{Compositor, OverlayStore};
pub use config::HighlightConfig;
pub use error::{Error, Result};
pub use geometry::Rect;
pub use highlighter::{Highlighter, PassToken, SearchTarget};
pub use project::{HighlightRect, PageMetrics};
pub use runs::{extract_runs, PageRuns, TextRun};

#[cfg(feature = "rendering")]
pub use compositor::PixmapCompositor;
