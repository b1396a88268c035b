use super::filter::DEFAULT_DIRECTION;
use crate::constants::TILT_CLAMP_DEG;
use glam::Vec2;

/// Raw device orientation angles in degrees. Browsers report `null` for
/// either axis when the sensor has no reading yet; those count as level.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    /// Front-back tilt.
    pub beta: Option<f32>,
    /// Left-right tilt.
    pub gamma: Option<f32>,
}

impl OrientationSample {
    pub fn new(beta: f32, gamma: f32) -> Self {
        Self {
            beta: Some(beta),
            gamma: Some(gamma),
        }
    }

    /// Screen-space "down" for this tilt, unit length.
    ///
    /// Gamma drives x and beta drives y through `sin`. A flat device carries no
    /// direction and yields the zero vector, which leaves the smoothed
    /// direction where it was.
    pub fn direction(&self) -> Vec2 {
        let gamma = clamp_tilt(self.gamma.unwrap_or(0.0)).to_radians();
        let beta = clamp_tilt(self.beta.unwrap_or(0.0)).to_radians();
        let raw = Vec2::new(gamma.sin(), beta.sin());
        let len = raw.length();
        if len > 0.0 {
            raw / len
        } else {
            Vec2::ZERO
        }
    }
}

#[inline]
fn clamp_tilt(deg: f32) -> f32 {
    if deg.is_finite() {
        deg.clamp(-TILT_CLAMP_DEG, TILT_CLAMP_DEG)
    } else {
        0.0
    }
}

/// Latest gravity direction derived from orientation events. Only the most
/// recent sample survives until the next frame.
#[derive(Clone, Copy, Debug)]
pub struct OrientationSignal {
    target: Vec2,
}

impl Default for OrientationSignal {
    fn default() -> Self {
        Self {
            target: DEFAULT_DIRECTION,
        }
    }
}

impl OrientationSignal {
    pub fn push(&mut self, sample: OrientationSample) -> Vec2 {
        self.target = sample.direction();
        self.target
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }
}

/// Latest pointer position in viewport coordinates. `None` until the first
/// move event after activation.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSignal {
    position: Option<Vec2>,
}

impl PointerSignal {
    pub fn push(&mut self, client_x: f32, client_y: f32) {
        if client_x.is_finite() && client_y.is_finite() {
            self.position = Some(Vec2::new(client_x, client_y));
        }
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn clear(&mut self) {
        self.position = None;
    }
}
