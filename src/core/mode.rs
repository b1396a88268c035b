//! Hover/Gravity state machine.
//!
//! The controller never touches the page. Every transition returns the list of
//! [`Effect`]s the runtime has to carry out, in order: anything belonging to
//! the previous mode is stopped before the next one starts, so two modes never
//! listen at the same time.

use super::settings::WeightRange;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerMode {
    Inactive,
    Hover,
    Gravity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionState {
    NotRequired,
    /// Access must be granted through a user gesture and has not been yet.
    Pending,
    Granted,
    Denied,
}

/// What the platform offers for orientation input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Platform {
    pub orientation_supported: bool,
    pub permission_required: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Split text, bind glyph sinks and subscribe to layout changes.
    StartHover,
    /// Drop the hover session and return glyphs to their resting weight.
    StopHover,
    AttachPointer,
    DetachPointer,
    /// Split text if needed, bind glyph sinks and subscribe to layout
    /// changes. The runtime reports the glyph count back through
    /// [`ModeController::gravity_started`].
    StartGravity { range: WeightRange },
    StopGravity,
    AttachOrientation,
    DetachOrientation,
    ShowPermissionPrompt,
    RemovePermissionPrompt,
    /// Ask the platform for sensor access; answer with
    /// [`ModeController::permission_resolved`] or
    /// [`ModeController::permission_failed`] quoting the same ticket.
    RequestPermission { ticket: u32 },
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Clone, Debug)]
pub struct ModeController {
    breakpoint: f32,
    platform: Platform,
    reduced_motion: bool,
    mode: ControllerMode,
    permission: PermissionState,
    range: Option<WeightRange>,
    hidden: bool,
    hover_session: bool,
    gravity_session: bool,
    // gravity found glyphs and may listen once permission allows
    armed: bool,
    pointer_attached: bool,
    orientation_attached: bool,
    prompt_visible: bool,
    next_ticket: u32,
    in_flight: Option<u32>,
}

impl ModeController {
    pub fn new(breakpoint: f32, platform: Platform, reduced_motion: bool) -> Self {
        let permission = if platform.permission_required {
            PermissionState::Pending
        } else {
            PermissionState::NotRequired
        };
        Self {
            breakpoint,
            platform,
            reduced_motion,
            mode: ControllerMode::Inactive,
            permission,
            range: None,
            hidden: false,
            hover_session: false,
            gravity_session: false,
            armed: false,
            pointer_attached: false,
            orientation_attached: false,
            prompt_visible: false,
            next_ticket: 0,
            in_flight: None,
        }
    }

    #[inline]
    pub fn mode(&self) -> ControllerMode {
        self.mode
    }

    #[inline]
    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    /// Range chosen when the current mode was activated.
    #[inline]
    pub fn weight_range(&self) -> Option<WeightRange> {
        self.range
    }

    #[inline]
    pub fn pointer_listening(&self) -> bool {
        self.pointer_attached
    }

    #[inline]
    pub fn orientation_listening(&self) -> bool {
        self.orientation_attached
    }

    #[inline]
    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn mode_for_width(&self, width: f32) -> ControllerMode {
        if width < self.breakpoint {
            ControllerMode::Gravity
        } else {
            ControllerMode::Hover
        }
    }

    /// Initial placement and every viewport change. A no-op while the width
    /// stays on the same side of the breakpoint.
    pub fn resolve(&mut self, width: f32) -> Effects {
        let target = self.mode_for_width(width);
        if target == self.mode {
            return Effects::new();
        }
        log::info!("[mode] {:?} -> {:?} (width {})", self.mode, target, width);
        let mut fx = self.deactivate();
        self.activate(target, &mut fx);
        fx
    }

    /// Outcome of the segmentation guard for the session requested by
    /// `StartGravity`.
    pub fn gravity_started(&mut self, glyphs: usize) -> Effects {
        let mut fx = Effects::new();
        if self.mode != ControllerMode::Gravity || !self.gravity_session {
            return fx;
        }
        if glyphs == 0 {
            log::debug!("[gravity] no glyphs, staying inert");
            self.gravity_session = false;
            fx.push(Effect::StopGravity);
            return fx;
        }
        if !self.platform.orientation_supported {
            log::debug!("[gravity] orientation unsupported, staying inert");
            self.gravity_session = false;
            fx.push(Effect::StopGravity);
            return fx;
        }
        self.armed = true;
        self.arm_sensors(&mut fx);
        fx
    }

    /// The user tapped the permission affordance.
    pub fn prompt_activated(&mut self) -> Effects {
        let mut fx = Effects::new();
        if self.mode != ControllerMode::Gravity || !self.prompt_visible || self.in_flight.is_some()
        {
            return fx;
        }
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.in_flight = Some(self.next_ticket);
        fx.push(Effect::RequestPermission {
            ticket: self.next_ticket,
        });
        fx
    }

    /// Result of a permission request. The platform's answer is always
    /// recorded; it only changes listeners if gravity is still armed.
    pub fn permission_resolved(&mut self, ticket: u32, granted: bool) -> Effects {
        let mut fx = Effects::new();
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
        }
        self.permission = if granted {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        };
        log::info!("[permission] {:?}", self.permission);
        if self.mode != ControllerMode::Gravity || !self.armed || self.in_flight.is_some() {
            return fx;
        }
        if self.prompt_visible {
            self.prompt_visible = false;
            fx.push(Effect::RemovePermissionPrompt);
        }
        if granted && !self.hidden && !self.orientation_attached {
            self.orientation_attached = true;
            fx.push(Effect::AttachOrientation);
        }
        fx
    }

    /// The request itself failed (threw or rejected) without an answer.
    /// Permission stays `Pending`, so the next activation offers the
    /// affordance again.
    pub fn permission_failed(&mut self, ticket: u32) -> Effects {
        let mut fx = Effects::new();
        if self.in_flight != Some(ticket) {
            return fx;
        }
        self.in_flight = None;
        log::info!("[permission] request failed, still {:?}", self.permission);
        if self.mode == ControllerMode::Gravity && self.armed && self.prompt_visible {
            self.prompt_visible = false;
            fx.push(Effect::RemovePermissionPrompt);
        }
        fx
    }

    /// Page visibility changed. Only live sensor listeners follow it; the
    /// session and its layout subscriptions stay.
    pub fn set_hidden(&mut self, hidden: bool) -> Effects {
        let mut fx = Effects::new();
        if self.hidden == hidden {
            return fx;
        }
        self.hidden = hidden;
        match self.mode {
            ControllerMode::Hover if self.hover_session => {
                if hidden && self.pointer_attached {
                    self.pointer_attached = false;
                    fx.push(Effect::DetachPointer);
                } else if !hidden && !self.pointer_attached {
                    self.pointer_attached = true;
                    fx.push(Effect::AttachPointer);
                }
            }
            ControllerMode::Gravity if self.armed && self.sensors_allowed() => {
                if hidden && self.orientation_attached {
                    self.orientation_attached = false;
                    fx.push(Effect::DetachOrientation);
                } else if !hidden && !self.orientation_attached {
                    self.orientation_attached = true;
                    fx.push(Effect::AttachOrientation);
                }
            }
            _ => {}
        }
        fx
    }

    /// Reduced-motion preference changed; the active mode restarts so the
    /// choice made at activation time is made again.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) -> Effects {
        if self.reduced_motion == reduced_motion {
            return Effects::new();
        }
        self.reduced_motion = reduced_motion;
        let mode = self.mode;
        if mode == ControllerMode::Inactive {
            return Effects::new();
        }
        let mut fx = self.deactivate();
        self.activate(mode, &mut fx);
        fx
    }

    /// Back to `Inactive`. Safe to call repeatedly.
    pub fn teardown(&mut self) -> Effects {
        self.deactivate()
    }

    fn activate(&mut self, mode: ControllerMode, fx: &mut Effects) {
        self.mode = mode;
        match mode {
            ControllerMode::Inactive => {}
            ControllerMode::Hover => {
                self.range = Some(WeightRange::HOVER);
                if self.reduced_motion {
                    // hover is switched off entirely, unlike gravity
                    log::info!("[hover] reduced motion, effect disabled");
                    return;
                }
                self.hover_session = true;
                fx.push(Effect::StartHover);
                if !self.hidden {
                    self.pointer_attached = true;
                    fx.push(Effect::AttachPointer);
                }
            }
            ControllerMode::Gravity => {
                let range = WeightRange::for_gravity(self.reduced_motion);
                self.range = Some(range);
                self.gravity_session = true;
                self.armed = false;
                fx.push(Effect::StartGravity { range });
            }
        }
    }

    fn deactivate(&mut self) -> Effects {
        let mut fx = Effects::new();
        if self.pointer_attached {
            self.pointer_attached = false;
            fx.push(Effect::DetachPointer);
        }
        if self.hover_session {
            self.hover_session = false;
            fx.push(Effect::StopHover);
        }
        if self.orientation_attached {
            self.orientation_attached = false;
            fx.push(Effect::DetachOrientation);
        }
        if self.prompt_visible {
            self.prompt_visible = false;
            fx.push(Effect::RemovePermissionPrompt);
        }
        if self.gravity_session {
            self.gravity_session = false;
            fx.push(Effect::StopGravity);
        }
        // results of requests still in flight no longer apply
        self.in_flight = None;
        self.armed = false;
        self.range = None;
        self.mode = ControllerMode::Inactive;
        fx
    }

    fn sensors_allowed(&self) -> bool {
        matches!(
            self.permission,
            PermissionState::NotRequired | PermissionState::Granted
        )
    }

    fn arm_sensors(&mut self, fx: &mut Effects) {
        match self.permission {
            PermissionState::NotRequired | PermissionState::Granted => {
                if !self.hidden && !self.orientation_attached {
                    self.orientation_attached = true;
                    fx.push(Effect::AttachOrientation);
                }
            }
            PermissionState::Pending => {
                if !self.prompt_visible {
                    self.prompt_visible = true;
                    fx.push(Effect::ShowPermissionPrompt);
                }
            }
            PermissionState::Denied => {
                log::debug!("[permission] denied earlier, staying inert");
            }
        }
    }
}
