use super::settings::{Viewport, WeightRange};
use glam::Vec2;

/// Gravity policy: heavier downhill, lighter uphill.
///
/// The offset of each glyph from the viewport center is projected onto the
/// gravity unit vector, normalized by half the screen diagonal, amplified by
/// `sensitivity` and clamped to [-1, 1] before being remapped onto the range.
#[derive(Clone, Copy, Debug)]
pub struct ProjectionMapper {
    pub origin: Vec2,
    pub radius: f32,
    pub sensitivity: f32,
    pub range: WeightRange,
}

impl ProjectionMapper {
    pub fn new(viewport: Viewport, sensitivity: f32, range: WeightRange) -> Self {
        Self {
            origin: viewport.center(),
            radius: viewport.normalization_radius(),
            sensitivity,
            range,
        }
    }

    /// Signed projection of the glyph offset onto `gravity`.
    #[inline]
    pub fn project(&self, center: Vec2, gravity: Vec2) -> f32 {
        (center - self.origin).dot(gravity)
    }

    /// Projection scaled into [-1, 1].
    #[inline]
    pub fn normalized(&self, projection: f32) -> f32 {
        (projection / self.radius * self.sensitivity).clamp(-1.0, 1.0)
    }

    #[inline]
    pub fn weight(&self, center: Vec2, gravity: Vec2) -> f32 {
        self.range
            .remap_signed(self.normalized(self.project(center, gravity)))
    }
}

/// Hover policy: the closer the pointer, the heavier the glyph.
#[derive(Clone, Copy, Debug)]
pub struct ProximityMapper {
    pub max_distance: f32,
    pub range: WeightRange,
}

impl ProximityMapper {
    pub fn new(max_distance: f32, range: WeightRange) -> Self {
        Self {
            max_distance: max_distance.max(f32::EPSILON),
            range,
        }
    }

    pub fn weight(&self, pointer: Vec2, center: Vec2) -> f32 {
        let distance = pointer.distance(center);
        if distance < self.max_distance {
            let closeness = (self.max_distance - distance).max(0.0) / self.max_distance;
            self.range.min + closeness * (self.range.max - self.range.min)
        } else {
            self.range.min
        }
    }
}
