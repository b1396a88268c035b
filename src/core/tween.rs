/// Easing curves used by glyph transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out.
    QuadOut,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// One retargetable value transition, bound once per glyph and reused.
///
/// Retargeting starts a fresh transition from wherever the value currently
/// is, so rapid retargets stay continuous. Times are milliseconds.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    start_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

// targets closer than this are treated as unchanged
const RETARGET_EPSILON: f32 = 0.05;

impl Tween {
    pub fn new(value: f32, duration_sec: f32, ease: Ease) -> Self {
        Self {
            from: value,
            to: value,
            start_ms: 0.0,
            duration_ms: (duration_sec.max(0.0) as f64) * 1000.0,
            ease,
        }
    }

    pub fn sample(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        self.from != self.to && now_ms - self.start_ms < self.duration_ms
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Returns `false` when `to` matches the current target and nothing
    /// was restarted.
    pub fn retarget(&mut self, now_ms: f64, to: f32) -> bool {
        if (to - self.to).abs() < RETARGET_EPSILON {
            return false;
        }
        self.from = self.sample(now_ms);
        self.to = to;
        self.start_ms = now_ms;
        true
    }

    /// Jump straight to `value` with no transition.
    pub fn set(&mut self, value: f32) {
        self.from = value;
        self.to = value;
    }
}
