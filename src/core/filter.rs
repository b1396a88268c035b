use glam::Vec2;

/// Straight down in screen space; the resting direction on (re)activation.
pub const DEFAULT_DIRECTION: Vec2 = Vec2::new(0.0, 1.0);

// below this the carried vector no longer has a trustworthy direction
const MIN_LENGTH: f32 = 1e-6;

/// Exponential smoothing of a direction signal into a stable unit vector.
///
/// The carried vector moves `alpha` of the way towards the target per axis
/// each step and is left unnormalized, so a target on the opposite side is
/// still reached. The output is that vector renormalized; when it has no
/// length the previous output stands.
#[derive(Clone, Debug)]
pub struct SignalFilter {
    alpha: f32,
    smoothed: Vec2,
    direction: Vec2,
}

impl SignalFilter {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            smoothed: DEFAULT_DIRECTION,
            direction: DEFAULT_DIRECTION,
        }
    }

    pub fn reset(&mut self) {
        self.smoothed = DEFAULT_DIRECTION;
        self.direction = DEFAULT_DIRECTION;
    }

    /// Last unit output.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.smoothed += (target - self.smoothed) * self.alpha;
        let len = self.smoothed.length();
        if len > MIN_LENGTH && len.is_finite() {
            self.direction = self.smoothed / len;
        }
        self.direction
    }

    /// True once further steps towards `target` would not move the output
    /// by more than about `epsilon`. A zero target only shrinks the carried
    /// vector without turning it, so it counts as settled.
    pub fn settled(&self, target: Vec2, epsilon: f32) -> bool {
        if target.length_squared() == 0.0 {
            return true;
        }
        (target - self.smoothed).length() <= epsilon
    }
}
