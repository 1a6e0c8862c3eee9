//! Configuration for highlight matching and composition.

/// Highlight engine configuration.
///
/// The defaults reproduce the matching behavior validated against scanned
/// business documents: a quarter-length leading-noise tolerance for long
/// overlaps, exact-start matching for short ones, and abandoned attempts
/// contributing nothing.
#[derive(Debug, Clone)]
pub struct HighlightConfig {
    /// Fraction of the remaining search text within which an overlap still
    /// counts as "at the start" (absorbs a bounded amount of leading noise,
    /// e.g. OCR artifacts).
    pub start_tolerance: f32,

    /// Overlaps of this many whitespace tokens or fewer never qualify for
    /// the tolerance above; they must match the remaining text's exact start.
    pub fuzzy_token_floor: usize,

    /// If set, an abandoned match attempt still contributes its rectangles
    /// when at least this fraction of the search text was already consumed.
    /// `None` discards abandoned attempts entirely.
    pub salvage_threshold: Option<f32>,

    /// Device pixel ratio divisor applied to projected rectangles before
    /// composition (1.0 for raw canvas pixels).
    pub pixel_ratio: f32,

    /// Overlay fill color (RGBA, each component in 0.0..=1.0).
    pub fill_color: [f32; 4],
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            start_tolerance: 0.25,
            fuzzy_token_floor: 3,
            salvage_threshold: None,
            pixel_ratio: 1.0,
            fill_color: [1.0, 1.0, 0.0, 0.3], // Yellow with 30% opacity
        }
    }

    /// Set the leading-noise start tolerance.
    pub fn with_start_tolerance(mut self, fraction: f32) -> Self {
        self.start_tolerance = fraction;
        self
    }

    /// Set the minimum overlap token count for fuzzy start matching.
    pub fn with_fuzzy_token_floor(mut self, tokens: usize) -> Self {
        self.fuzzy_token_floor = tokens;
        self
    }

    /// Salvage abandoned attempts that consumed at least `fraction` of the
    /// search text.
    pub fn with_salvage_threshold(mut self, fraction: f32) -> Self {
        self.salvage_threshold = Some(fraction);
        self
    }

    /// Set the device pixel ratio divisor.
    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = ratio;
        self
    }

    /// Set the overlay fill color.
    pub fn with_fill_color(mut self, rgba: [f32; 4]) -> Self {
        self.fill_color = rgba;
        self
    }
}
