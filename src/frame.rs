use crate::core::{Field, FrameScheduler, GlyphGeometry, GlyphLayout};
use crate::glyphs::GlyphSet;
use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct LoopState<F> {
    field: F,
    glyphs: GlyphSet,
    layout: GlyphLayout,
    scheduler: FrameScheduler,
    frame: Option<AnimationFrame>,
}

/// requestAnimationFrame driven pass for one field.
///
/// Handles are cheap clones sharing one state. Input handlers call
/// [`FrameLoop::update`]; layout handlers call [`FrameLoop::invalidate_layout`].
/// Whatever arrives between two frames collapses into a single pass.
pub struct FrameLoop<F: Field + 'static> {
    state: Rc<RefCell<LoopState<F>>>,
}

impl<F: Field + 'static> Clone for FrameLoop<F> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<F: Field + 'static> FrameLoop<F> {
    pub fn new(field: F, glyphs: GlyphSet) -> Self {
        Self {
            state: Rc::new(RefCell::new(LoopState {
                field,
                glyphs,
                layout: GlyphLayout::new(),
                scheduler: FrameScheduler::new(),
                frame: None,
            })),
        }
    }

    pub fn glyph_count(&self) -> usize {
        self.state.borrow().glyphs.glyph_count()
    }

    /// Feed new input to the field and make sure a pass follows.
    pub fn update(&self, f: impl FnOnce(&mut F)) {
        {
            let Ok(mut st) = self.state.try_borrow_mut() else {
                return;
            };
            f(&mut st.field);
            st.scheduler.mark_dirty();
        }
        schedule(&self.state);
    }

    pub fn invalidate_layout(&self) {
        {
            let Ok(mut st) = self.state.try_borrow_mut() else {
                return;
            };
            st.layout.invalidate();
            st.scheduler.mark_dirty();
        }
        schedule(&self.state);
    }

    pub fn request_tick(&self) {
        schedule(&self.state);
    }

    /// Cancel the pending frame, if any. Nothing fires after this returns.
    pub fn cancel(&self) {
        let mut st = self.state.borrow_mut();
        st.scheduler.cancel();
        st.frame = None;
    }

    /// Cancel and snap every glyph to the field's resting weight.
    pub fn rest(&self) {
        self.cancel();
        let mut st = self.state.borrow_mut();
        let value = st.field.rest_weight();
        st.glyphs.rest(value);
    }
}

fn schedule<F: Field + 'static>(state: &Rc<RefCell<LoopState<F>>>) {
    let Ok(mut st) = state.try_borrow_mut() else {
        return;
    };
    if st.scheduler.request_tick() {
        st.frame = Some(request_frame(Rc::downgrade(state)));
    }
}

fn request_frame<F: Field + 'static>(weak: Weak<RefCell<LoopState<F>>>) -> AnimationFrame {
    request_animation_frame(move |_ts| {
        if let Some(state) = weak.upgrade() {
            run_frame(&state);
        }
    })
}

fn run_frame<F: Field + 'static>(state: &Rc<RefCell<LoopState<F>>>) {
    let Ok(mut st) = state.try_borrow_mut() else {
        return;
    };
    // the handle for this very frame; keep it until the callback is done
    let _fired = st.frame.take();
    st.scheduler.begin_frame();

    let now = instant::now();
    let LoopState {
        field,
        glyphs,
        layout,
        scheduler,
        frame,
    } = &mut *st;
    layout.refresh(&*glyphs);
    glyphs.set_clock(now);
    let converging = field.pass(layout, glyphs);
    let animating = glyphs.advance(now);
    if converging || animating {
        scheduler.mark_dirty();
    }
    if scheduler.finish_frame() {
        *frame = Some(request_frame(Rc::downgrade(state)));
    }
}
