use crate::core::{Ease, GlyphGeometry, Tween, Viewport, WeightSink};
use crate::dom;
use glam::Vec2;
use web_sys as web;

// smallest change worth a style write
const WRITE_EPSILON: f32 = 0.05;

/// The glyph elements of one session with a transition bound to each.
///
/// Serves both as the layout source (bounding rects) and as the weight sink
/// (tweens retargeted by the pass, then advanced and written every frame).
pub struct GlyphSet {
    elements: Vec<web::HtmlElement>,
    tweens: Vec<Tween>,
    written: Vec<f32>,
    property: &'static str,
    clock_ms: f64,
}

impl GlyphSet {
    pub fn bind(
        elements: Vec<web::HtmlElement>,
        property: &'static str,
        initial: f32,
        duration_sec: f32,
        ease: Ease,
    ) -> Self {
        let n = elements.len();
        Self {
            elements,
            tweens: vec![Tween::new(initial, duration_sec, ease); n],
            written: vec![f32::NAN; n],
            property,
            clock_ms: 0.0,
        }
    }

    /// Timestamp used for retargets during the coming pass.
    #[inline]
    pub fn set_clock(&mut self, now_ms: f64) {
        self.clock_ms = now_ms;
    }

    /// Write the current value of every transition. Returns `true` while any
    /// of them is still moving.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let mut active = false;
        for i in 0..self.elements.len() {
            let tween = &self.tweens[i];
            active |= tween.is_active(now_ms);
            let value = tween.sample(now_ms);
            if (value - self.written[i]).abs() >= WRITE_EPSILON || self.written[i].is_nan() {
                self.write(i, value);
            }
        }
        active
    }

    /// Jump every glyph to `value` immediately.
    pub fn rest(&mut self, value: f32) {
        for i in 0..self.elements.len() {
            self.tweens[i].set(value);
            self.write(i, value);
        }
    }

    /// Drop an inline property left behind by another session, so it does
    /// not shadow the one this set animates.
    pub fn clear_property(&self, property: &str) {
        if property == self.property {
            return;
        }
        for el in &self.elements {
            _ = el.style().remove_property(property);
        }
    }

    fn write(&mut self, index: usize, value: f32) {
        let style = self.elements[index].style();
        _ = style.set_property(self.property, &format!("{:.1}", value));
        self.written[index] = value;
    }
}

impl GlyphGeometry for GlyphSet {
    fn viewport(&self) -> Viewport {
        dom::viewport()
    }

    fn glyph_count(&self) -> usize {
        self.elements.len()
    }

    fn glyph_center(&self, index: usize) -> Vec2 {
        let r = self.elements[index].get_bounding_client_rect();
        Vec2::new(
            (r.left() + r.width() * 0.5) as f32,
            (r.top() + r.height() * 0.5) as f32,
        )
    }
}

impl WeightSink for GlyphSet {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn apply(&mut self, index: usize, weight: f32) {
        if let Some(tween) = self.tweens.get_mut(index) {
            tween.retarget(self.clock_ms, weight);
        }
    }
}
