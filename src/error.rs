//! Error types for the highlight engine.
//!
//! Highlighting itself never fails: a missing overlay degrades the viewing
//! experience but must not block it, so the hot path absorbs its failure
//! modes locally (see [`crate::highlighter`]). The errors here cover the
//! crate's outer surfaces only: fixture loading and raster setup.

/// Result type alias for highlight engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur outside the highlight hot path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error while reading a fixture file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON fixture
    #[error("Fixture error: {0}")]
    Fixture(#[from] serde_json::Error),

    /// Page index outside the document's page range
    #[error("Page {page} out of range (document has {count} pages)")]
    PageOutOfRange {
        /// Requested 1-based page number
        page: usize,
        /// Number of pages in the document
        count: usize,
    },

    /// Raster surface error (zero-sized or unallocatable pixmap)
    #[cfg(feature = "rendering")]
    #[error("Render error: {0}")]
    Render(String),
}
