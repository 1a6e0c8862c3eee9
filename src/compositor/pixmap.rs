//! Raster compositor painting highlight overlays onto page pixmaps.

use crate::compositor::Compositor;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use log::debug;
use std::collections::HashMap;
use tiny_skia::{Color, Paint, Pixmap, Transform};

/// Paints semi-transparent highlight fills onto per-page pixmaps.
///
/// Each page keeps its base (unhighlighted) pixmap; every paint starts from
/// a fresh copy of the base, so repainting a page never stacks fills on top
/// of earlier ones.
pub struct PixmapCompositor {
    fill_color: [f32; 4],
    base: HashMap<usize, Pixmap>,
    composited: HashMap<usize, Pixmap>,
}

impl PixmapCompositor {
    /// Create a compositor with the given RGBA fill color.
    pub fn new(fill_color: [f32; 4]) -> Self {
        Self {
            fill_color,
            base: HashMap::new(),
            composited: HashMap::new(),
        }
    }

    /// Register a page's rendered base pixmap.
    pub fn add_page(&mut self, page_number: usize, pixmap: Pixmap) {
        self.composited.remove(&page_number);
        self.base.insert(page_number, pixmap);
    }

    /// Register a blank white page of the given pixel size.
    pub fn blank_page(&mut self, page_number: usize, width: u32, height: u32) -> Result<()> {
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::Render(format!("cannot allocate {}x{} pixmap", width, height)))?;
        pixmap.fill(Color::WHITE);
        self.add_page(page_number, pixmap);
        Ok(())
    }

    /// The page's pixmap with its current overlay applied, if painted.
    pub fn composited(&self, page_number: usize) -> Option<&Pixmap> {
        self.composited.get(&page_number)
    }

    fn fill_paint(&self) -> Paint<'_> {
        let [r, g, b, a] = self.fill_color;
        let mut paint = Paint::default();
        paint.set_color(Color::from_rgba(r, g, b, a).unwrap_or(Color::BLACK));
        paint.anti_alias = false;
        paint
    }
}

impl Compositor for PixmapCompositor {
    fn paint(&mut self, page_number: usize, rects: &[Rect]) {
        let base = match self.base.get(&page_number) {
            Some(pixmap) => pixmap,
            None => {
                debug!("no base pixmap for page {}, skipping paint", page_number);
                return;
            }
        };

        let mut pixmap = base.clone();
        let paint = self.fill_paint();

        for rect in rects {
            if let Some(skia_rect) =
                tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
            {
                pixmap.fill_rect(skia_rect, &paint, Transform::identity(), None);
            }
        }

        self.composited.insert(page_number, pixmap);
    }
}
