//! Coordinate projection from PDF user-space to rendered pixel-space.
//!
//! A text run's placement transform positions its glyph origin in PDF
//! user-space, which has its origin at the bottom-left of the page and is
//! independent of any on-screen rendering scale. The rendered canvas has its
//! origin at the top-left, so projection divides by the native-to-pixel
//! scale factors and flips the vertical axis.

use crate::geometry::Rect;
use crate::runs::TextRun;
use serde::{Deserialize, Serialize};

/// A highlight rectangle in rendered pixel space.
pub type HighlightRect = Rect;

/// Page dimensions needed for projection: the native (unscaled) viewport
/// size in PDF user-space units and the rendered canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    /// Native viewport width in user-space units
    pub native_width: f32,
    /// Native viewport height in user-space units
    pub native_height: f32,
    /// Rendered canvas width in pixels
    pub pixel_width: f32,
    /// Rendered canvas height in pixels
    pub pixel_height: f32,
}

impl PageMetrics {
    /// Create page metrics from native and rendered dimensions.
    pub fn new(native: (f32, f32), rendered: (f32, f32)) -> Self {
        Self {
            native_width: native.0,
            native_height: native.1,
            pixel_width: rendered.0,
            pixel_height: rendered.1,
        }
    }

    /// Horizontal user-space-per-pixel scale factor.
    pub fn scale_x(&self) -> f32 {
        self.native_width / self.pixel_width
    }

    /// Vertical user-space-per-pixel scale factor.
    pub fn scale_y(&self) -> f32 {
        self.native_height / self.pixel_height
    }

    /// Whether the rendered surface has usable dimensions.
    pub fn is_valid(&self) -> bool {
        self.pixel_width > 0.0 && self.pixel_height > 0.0
    }
}

/// Project a text run's user-space box into rendered pixel space.
///
/// Only the translation components of the run's transform are used;
/// rotation and skew are not modeled. The vertical coordinate is flipped
/// from the PDF's bottom-left origin to the canvas's top-left origin.
///
/// # Examples
///
/// ```
/// use pdf_highlight::project::{project_run, PageMetrics};
/// use pdf_highlight::runs::TextRun;
///
/// let run = TextRun::new("total", [1.0, 0.0, 0.0, 1.0, 100.0, 700.0], 50.0, 12.0);
/// let metrics = PageMetrics::new((800.0, 1000.0), (400.0, 500.0));
/// let rect = project_run(&run, &metrics);
///
/// assert_eq!(rect.x, 50.0);
/// assert_eq!(rect.y, 144.0);
/// assert_eq!(rect.width, 25.0);
/// assert_eq!(rect.height, 6.0);
/// ```
pub fn project_run(run: &TextRun, metrics: &PageMetrics) -> HighlightRect {
    let scale_x = metrics.scale_x();
    let scale_y = metrics.scale_y();

    let x = run.tx() / scale_x;
    let y = metrics.pixel_height - run.ty() / scale_y - run.height / scale_y;

    Rect::new(x, y, run.width / scale_x, run.height / scale_y)
}
