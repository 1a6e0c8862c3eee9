//! Highlight composition: painting accepted rectangles per page.
//!
//! The compositor boundary is a single operation, [`Compositor::paint`], so
//! alignment and projection stay testable without a real rendering surface:
//! a test double simply records the rect list it was handed.
//!
//! Painting is a replace, not an append. Re-running highlight composition
//! for a page clears any prior overlay for that page first, so repeated
//! calls with the same inputs leave exactly one overlay on screen.

#[cfg(feature = "rendering")]
mod pixmap;

#[cfg(feature = "rendering")]
pub use pixmap::PixmapCompositor;

use crate::geometry::Rect;
use log::debug;
use std::collections::HashMap;

/// Renders a page's highlight rectangles as a non-interactive overlay.
pub trait Compositor {
    /// Replace the overlay for `page_number` with `rects`.
    ///
    /// An empty slice clears the page's overlay. The overlay is purely
    /// additive visual content and must not intercept interaction with the
    /// underlying page.
    fn paint(&mut self, page_number: usize, rects: &[Rect]);
}

/// In-memory overlay model: one rect set per page.
///
/// This is the compositor used when the surrounding application owns the
/// actual drawing (DOM nodes, canvas layers); it holds the current overlay
/// state per page and exposes it for rendering or assertion. Each page's
/// overlay is independent and may be replaced or cleared without
/// coordinating with other pages.
#[derive(Debug, Default)]
pub struct OverlayStore {
    overlays: HashMap<usize, Vec<Rect>>,
}

impl OverlayStore {
    /// Create an empty overlay store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current overlay for a page, if any rects are painted there.
    pub fn overlay(&self, page_number: usize) -> Option<&[Rect]> {
        self.overlays.get(&page_number).map(|v| v.as_slice())
    }

    /// Bounding box of a page's overlay.
    pub fn bounding_box(&self, page_number: usize) -> Option<Rect> {
        let rects = self.overlays.get(&page_number)?;
        let mut iter = rects.iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, r| acc.union(r)))
    }

    /// Remove a page's overlay entirely.
    pub fn clear(&mut self, page_number: usize) {
        self.overlays.remove(&page_number);
    }

    /// Number of pages currently carrying an overlay.
    pub fn page_count(&self) -> usize {
        self.overlays.len()
    }
}

impl Compositor for OverlayStore {
    fn paint(&mut self, page_number: usize, rects: &[Rect]) {
        debug!("painting {} rects on page {}", rects.len(), page_number);
        if rects.is_empty() {
            self.overlays.remove(&page_number);
        } else {
            self.overlays.insert(page_number, rects.to_vec());
        }
    }
}
