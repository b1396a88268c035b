/// Coalesces update requests into at most one pass per display frame.
///
/// The scheduler only keeps the bookkeeping; whoever owns it asks for an
/// animation frame whenever a method returns `true`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameScheduler {
    scheduled: bool,
    dirty: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the caller must request a frame. Further calls
    /// before the frame fires return `false`.
    pub fn request_tick(&mut self) -> bool {
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// New input arrived; make sure one more pass follows the current one.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Called first thing in the frame callback.
    #[inline]
    pub fn begin_frame(&mut self) {
        self.scheduled = false;
    }

    /// Called at the end of the pass. Consumes the dirty flag and returns
    /// `true` if another frame must be requested.
    pub fn finish_frame(&mut self) -> bool {
        if self.dirty {
            self.dirty = false;
            self.request_tick()
        } else {
            false
        }
    }

    /// Forget any pending work. The owner drops its frame handle alongside.
    pub fn cancel(&mut self) {
        self.scheduled = false;
        self.dirty = false;
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
