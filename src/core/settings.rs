use crate::constants::*;
use glam::Vec2;

/// Inclusive bounds for the weight written to a glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightRange {
    pub min: f32,
    pub max: f32,
}

impl WeightRange {
    pub const GRAVITY: WeightRange = WeightRange {
        min: GRAVITY_WEIGHT_MIN,
        max: GRAVITY_WEIGHT_MAX,
    };
    pub const GRAVITY_REDUCED: WeightRange = WeightRange {
        min: REDUCED_WEIGHT_MIN,
        max: REDUCED_WEIGHT_MAX,
    };
    pub const HOVER: WeightRange = WeightRange {
        min: MIN_WEIGHT,
        max: MAX_FONT_WEIGHT,
    };

    /// Gravity keeps running under reduced motion, only with less amplitude.
    pub fn for_gravity(reduced_motion: bool) -> Self {
        if reduced_motion {
            Self::GRAVITY_REDUCED
        } else {
            Self::GRAVITY
        }
    }

    #[inline]
    pub fn midpoint(&self) -> f32 {
        (self.min + self.max) * 0.5
    }

    /// Remap `t` in [-1, 1] onto [min, max].
    #[inline]
    pub fn remap_signed(&self, t: f32) -> f32 {
        let t = t.clamp(-1.0, 1.0);
        self.min + (t + 1.0) * 0.5 * (self.max - self.min)
    }

    #[inline]
    pub fn contains(&self, w: f32) -> bool {
        w >= self.min && w <= self.max
    }
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Half the screen diagonal, never below 1 so it is always safe to divide by.
    #[inline]
    pub fn normalization_radius(&self) -> f32 {
        (self.width.hypot(self.height) * 0.5).max(1.0)
    }
}

/// Tunables shared by the controller and the fields.
#[derive(Clone, Debug)]
pub struct Settings {
    pub breakpoint_px: f32,
    pub smoothing_alpha: f32,
    pub sensitivity: f32,
    pub settle_epsilon: f32,
    pub hover_max_distance: f32,
    pub hover_range: WeightRange,
    pub gravity_tween_sec: f32,
    pub hover_tween_sec: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            breakpoint_px: BREAKPOINT_PX,
            smoothing_alpha: SMOOTHING_ALPHA,
            sensitivity: SENSITIVITY,
            settle_epsilon: SETTLE_EPSILON,
            hover_max_distance: MAX_DISTANCE,
            hover_range: WeightRange::HOVER,
            gravity_tween_sec: GRAVITY_TWEEN_SEC,
            hover_tween_sec: HOVER_TWEEN_SEC,
        }
    }
}
