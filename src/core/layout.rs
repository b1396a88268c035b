use super::settings::Viewport;
use glam::Vec2;

/// Something that can report where glyphs are on screen. The web runtime
/// implements this over bounding client rects; tests use fixed points.
pub trait GlyphGeometry {
    fn viewport(&self) -> Viewport;
    fn glyph_count(&self) -> usize;
    fn glyph_center(&self, index: usize) -> Vec2;
}

/// Cached glyph centers, index-aligned with the glyph list.
///
/// Layout events only mark the cache stale; the next pass refreshes it before
/// projecting, so bursts of scroll/resize events cost one measurement.
#[derive(Clone, Debug)]
pub struct GlyphLayout {
    centers: Vec<Vec2>,
    viewport: Viewport,
    stale: bool,
}

impl Default for GlyphLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphLayout {
    pub fn new() -> Self {
        Self {
            centers: Vec::new(),
            viewport: Viewport::default(),
            stale: true,
        }
    }

    #[inline]
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    #[inline]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Re-measure every glyph and the viewport.
    pub fn recompute(&mut self, geometry: &impl GlyphGeometry) {
        self.viewport = geometry.viewport();
        let n = geometry.glyph_count();
        self.centers.clear();
        self.centers.reserve(n);
        for i in 0..n {
            self.centers.push(geometry.glyph_center(i));
        }
        self.stale = false;
    }

    /// Recompute only if something invalidated the cache. Returns whether a
    /// measurement happened.
    pub fn refresh(&mut self, geometry: &impl GlyphGeometry) -> bool {
        if self.stale {
            self.recompute(geometry);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn centers(&self) -> &[Vec2] {
        &self.centers
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}
