use crate::constants::{GRAVITY_WEIGHT_PROPERTY, HOVER_WEIGHT_PROPERTY, REDUCED_MOTION_QUERY};
use crate::core::{
    Ease, Effect, Effects, GravityField, HoverField, ModeController, Settings, WeightRange,
};
use crate::dom;
use crate::error::EffectError;
use crate::events;
use crate::frame::FrameLoop;
use crate::glyphs::GlyphSet;
use crate::overlay::PermissionPrompt;
use crate::permission;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type SharedRuntime = Rc<RefCell<Runtime>>;

struct HoverSession {
    frame: FrameLoop<HoverField>,
    _layout: Vec<EventListener>,
    pointer: Option<EventListener>,
}

struct GravitySession {
    frame: FrameLoop<GravityField>,
    _layout: Vec<EventListener>,
    sensors: Vec<EventListener>,
}

/// Carries out what the [`ModeController`] decides.
///
/// Every subscription lives in the session that needs it, so stopping a mode
/// is dropping its session: listeners unregister and the pending frame is
/// cancelled right there.
pub struct Runtime {
    controller: ModeController,
    settings: Settings,
    hover: Option<HoverSession>,
    gravity: Option<GravitySession>,
    prompt: Option<PermissionPrompt>,
    page: Vec<EventListener>,
    me: Weak<RefCell<Runtime>>,
}

/// Run `f` on the runtime behind `me` unless it is gone or already busy.
pub fn with_runtime(me: &Weak<RefCell<Runtime>>, f: impl FnOnce(&mut Runtime)) {
    let Some(rt) = me.upgrade() else {
        return;
    };
    let Ok(mut rt) = rt.try_borrow_mut() else {
        log::debug!("[mode] runtime busy, dropping event");
        return;
    };
    f(&mut rt);
}

impl Runtime {
    pub fn install(settings: Settings) -> SharedRuntime {
        let platform = permission::platform();
        let reduced_motion = dom::media_matches(REDUCED_MOTION_QUERY);
        log::info!(
            "[mode] orientation={} permission_required={} reduced_motion={}",
            platform.orientation_supported,
            platform.permission_required,
            reduced_motion
        );
        let rt = Rc::new_cyclic(|me| {
            RefCell::new(Runtime {
                controller: ModeController::new(settings.breakpoint_px, platform, reduced_motion),
                settings,
                hover: None,
                gravity: None,
                prompt: None,
                page: Vec::new(),
                me: me.clone(),
            })
        });
        {
            let mut r = rt.borrow_mut();
            let me = r.me.clone();
            r.page = events::listen_page(&me);
            let hidden = dom::page_hidden();
            r.handle(|c| c.set_hidden(hidden));
            let width = dom::viewport().width;
            r.handle(|c| c.resolve(width));
        }
        rt
    }

    /// Apply a controller transition and carry out the effects it returns,
    /// including any follow-up effects those produce.
    pub fn handle(&mut self, f: impl FnOnce(&mut ModeController) -> Effects) {
        let mut queue: VecDeque<Effect> = f(&mut self.controller).into_iter().collect();
        while let Some(effect) = queue.pop_front() {
            queue.extend(self.execute(effect));
        }
    }

    pub fn refresh_layout(&self) {
        if let Some(s) = &self.hover {
            s.frame.invalidate_layout();
        }
        if let Some(s) = &self.gravity {
            s.frame.invalidate_layout();
        }
    }

    /// Explicit teardown: back to inactive and off the page entirely.
    pub fn shutdown(&mut self) {
        self.handle(|c| c.teardown());
        self.page.clear();
    }

    fn execute(&mut self, effect: Effect) -> Effects {
        match effect {
            Effect::StartHover => match self.start_hover() {
                Ok(session) => self.hover = Some(session),
                Err(e) => log::debug!("[hover] not started: {}", e),
            },
            Effect::StopHover => {
                if let Some(session) = self.hover.take() {
                    session.frame.rest();
                }
            }
            Effect::AttachPointer => {
                let document = dom::window_document();
                if let (Some(session), Some(document)) = (self.hover.as_mut(), document) {
                    let frame = session.frame.clone();
                    session.pointer = Some(events::listen_pointer(&document, frame));
                }
            }
            Effect::DetachPointer => {
                if let Some(session) = self.hover.as_mut() {
                    session.pointer = None;
                }
            }
            Effect::StartGravity { range } => {
                let glyphs = match self.start_gravity(range) {
                    Ok(session) => {
                        let n = session.frame.glyph_count();
                        self.gravity = Some(session);
                        n
                    }
                    Err(e) => {
                        log::debug!("[gravity] not started: {}", e);
                        0
                    }
                };
                return self.controller.gravity_started(glyphs);
            }
            Effect::StopGravity => {
                if let Some(session) = self.gravity.take() {
                    session.frame.cancel();
                }
            }
            Effect::AttachOrientation => {
                if let (Some(session), Some(window)) = (self.gravity.as_mut(), web::window()) {
                    let frame = session.frame.clone();
                    session.sensors = events::listen_orientation(&window, frame);
                    session.frame.request_tick();
                }
            }
            Effect::DetachOrientation => {
                if let Some(session) = self.gravity.as_mut() {
                    session.sensors.clear();
                }
            }
            Effect::ShowPermissionPrompt => {
                let me = self.me.clone();
                let shown = dom::window_document()
                    .ok_or(EffectError::Unsupported("document"))
                    .and_then(|document| {
                        PermissionPrompt::show(&document, move || {
                            with_runtime(&me, |rt| rt.handle(|c| c.prompt_activated()));
                        })
                    });
                match shown {
                    Ok(prompt) => self.prompt = Some(prompt),
                    Err(e) => log::warn!("[permission] prompt unavailable: {}", e),
                }
            }
            Effect::RemovePermissionPrompt => {
                self.prompt = None;
            }
            Effect::RequestPermission { ticket } => return self.request_permission(ticket),
        }
        Effects::new()
    }

    fn start_hover(&self) -> Result<HoverSession, EffectError> {
        let glyphs = self.bind_glyphs(
            HOVER_WEIGHT_PROPERTY,
            self.settings.hover_range.min,
            self.settings.hover_tween_sec,
            Ease::Linear,
        )?;
        let frame = FrameLoop::new(HoverField::new(&self.settings), glyphs);
        let window = web::window().ok_or(EffectError::Unsupported("window"))?;
        let on_layout = frame.clone();
        let layout = events::listen_layout(&window, move || on_layout.invalidate_layout());
        log::info!("[hover] started with {} glyphs", frame.glyph_count());
        Ok(HoverSession {
            frame,
            _layout: layout,
            pointer: None,
        })
    }

    fn start_gravity(&self, range: WeightRange) -> Result<GravitySession, EffectError> {
        let glyphs = self.bind_glyphs(
            GRAVITY_WEIGHT_PROPERTY,
            range.midpoint(),
            self.settings.gravity_tween_sec,
            Ease::QuadOut,
        )?;
        // the hover rest weight would pin glyphs that style through `--w`
        glyphs.clear_property(HOVER_WEIGHT_PROPERTY);
        let frame = FrameLoop::new(GravityField::new(&self.settings, range), glyphs);
        let window = web::window().ok_or(EffectError::Unsupported("window"))?;
        let on_layout = frame.clone();
        let layout = events::listen_layout(&window, move || on_layout.invalidate_layout());
        log::info!(
            "[gravity] started with {} glyphs, range {}..{}",
            frame.glyph_count(),
            range.min,
            range.max
        );
        Ok(GravitySession {
            frame,
            _layout: layout,
            sensors: Vec::new(),
        })
    }

    fn bind_glyphs(
        &self,
        property: &'static str,
        initial: f32,
        duration_sec: f32,
        ease: Ease,
    ) -> Result<GlyphSet, EffectError> {
        let document = dom::window_document().ok_or(EffectError::Unsupported("document"))?;
        let roots = dom::effect_roots(&document);
        let elements = dom::ensure_glyphs(&document, &roots);
        if elements.is_empty() {
            return Err(EffectError::NoGlyphs);
        }
        Ok(GlyphSet::bind(elements, property, initial, duration_sec, ease))
    }

    fn request_permission(&mut self, ticket: u32) -> Effects {
        let pending = match permission::begin_request() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[permission] request failed: {}", e);
                return self.controller.permission_failed(ticket);
            }
        };
        let me = self.me.clone();
        spawn_local(async move {
            let answer = permission::await_answer(pending).await;
            with_runtime(&me, |rt| {
                rt.handle(|c| match answer {
                    Ok(()) => c.permission_resolved(ticket, true),
                    Err(EffectError::PermissionDenied) => c.permission_resolved(ticket, false),
                    Err(e) => {
                        log::warn!("[permission] request failed: {}", e);
                        c.permission_failed(ticket)
                    }
                })
            });
        });
        Effects::new()
    }
}
