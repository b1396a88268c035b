// Host-side tests for frame coalescing, layout caching and glyph transitions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;
use glam::Vec2;
use std::cell::Cell;

struct FixedGeometry {
    viewport: Viewport,
    centers: Vec<Vec2>,
    measured: Cell<usize>,
}

impl GlyphGeometry for FixedGeometry {
    fn viewport(&self) -> Viewport {
        self.viewport
    }
    fn glyph_count(&self) -> usize {
        self.centers.len()
    }
    fn glyph_center(&self, index: usize) -> Vec2 {
        self.measured.set(self.measured.get() + 1);
        self.centers[index]
    }
}

fn geometry() -> FixedGeometry {
    FixedGeometry {
        viewport: Viewport::new(800.0, 600.0),
        centers: vec![
            Vec2::new(100.0, 100.0),
            Vec2::new(400.0, 300.0),
            Vec2::new(700.0, 550.0),
        ],
        measured: Cell::new(0),
    }
}

#[test]
fn request_tick_coalesces_until_the_frame_fires() {
    let mut s = FrameScheduler::new();
    let mut frames_requested = 0;
    for _ in 0..100 {
        if s.request_tick() {
            frames_requested += 1;
        }
    }
    assert_eq!(frames_requested, 1);
    assert!(s.is_scheduled());

    s.begin_frame();
    assert!(!s.is_scheduled());
    assert!(!s.finish_frame());
    assert!(s.request_tick());
}

#[test]
fn dirty_input_reschedules_exactly_once() {
    let mut s = FrameScheduler::new();
    assert!(s.request_tick());
    s.begin_frame();
    s.mark_dirty();
    s.mark_dirty();
    assert!(s.finish_frame());
    assert!(s.is_scheduled());
    assert!(!s.is_dirty());
    // input arriving while that frame is pending does not add another
    s.mark_dirty();
    assert!(!s.request_tick());
    s.begin_frame();
    assert!(s.finish_frame());
    s.begin_frame();
    assert!(!s.finish_frame());
}

#[test]
fn cancel_forgets_pending_work() {
    let mut s = FrameScheduler::new();
    assert!(s.request_tick());
    s.mark_dirty();
    s.cancel();
    assert!(!s.is_scheduled());
    assert!(!s.is_dirty());
    // idempotent
    s.cancel();
    assert!(s.request_tick());
}

#[test]
fn layout_starts_stale_and_refreshes_once() {
    let g = geometry();
    let mut layout = GlyphLayout::new();
    assert!(layout.is_stale());
    assert!(layout.refresh(&g));
    assert_eq!(layout.len(), g.centers.len());
    assert_eq!(layout.viewport(), g.viewport);
    assert!(!layout.refresh(&g));
    assert_eq!(g.measured.get(), 3);
}

#[test]
fn layout_recompute_is_idempotent() {
    let g = geometry();
    let mut layout = GlyphLayout::new();
    layout.recompute(&g);
    let first = layout.centers().to_vec();
    layout.invalidate();
    assert!(layout.refresh(&g));
    assert_eq!(layout.centers(), first.as_slice());
    layout.recompute(&g);
    assert_eq!(layout.centers(), first.as_slice());
}

#[test]
fn layout_follows_geometry_changes() {
    let mut g = geometry();
    let mut layout = GlyphLayout::new();
    layout.refresh(&g);
    g.centers.push(Vec2::new(5.0, 5.0));
    g.centers[0] = Vec2::new(1.0, 2.0);
    layout.invalidate();
    layout.refresh(&g);
    assert_eq!(layout.len(), 4);
    assert_eq!(layout.centers()[0], Vec2::new(1.0, 2.0));
}

#[test]
fn ease_curves_hit_their_endpoints() {
    for ease in [Ease::Linear, Ease::QuadOut] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(4.0), 1.0);
    }
    assert_eq!(Ease::Linear.apply(0.5), 0.5);
    assert_eq!(Ease::QuadOut.apply(0.5), 0.75);
}

#[test]
fn tween_runs_to_its_target_in_duration() {
    let mut t = Tween::new(100.0, 0.5, Ease::Linear);
    assert!(t.retarget(1000.0, 800.0));
    assert_eq!(t.sample(1000.0), 100.0);
    assert!((t.sample(1250.0) - 450.0).abs() < 1e-3);
    assert!(t.is_active(1250.0));
    assert_eq!(t.sample(1500.0), 800.0);
    assert!(!t.is_active(1500.0));
    assert_eq!(t.sample(9000.0), 800.0);
}

#[test]
fn retarget_continues_from_current_value() {
    let mut t = Tween::new(100.0, 0.35, Ease::QuadOut);
    t.retarget(0.0, 800.0);
    let mid = t.sample(175.0);
    assert!(mid > 100.0 && mid < 800.0);
    t.retarget(175.0, 100.0);
    assert!((t.sample(175.0) - mid).abs() < 1e-3);
    assert_eq!(t.target(), 100.0);
}

#[test]
fn retarget_to_same_value_is_a_no_op() {
    let mut t = Tween::new(100.0, 0.35, Ease::QuadOut);
    assert!(t.retarget(0.0, 500.0));
    let at = t.sample(100.0);
    assert!(!t.retarget(100.0, 500.0));
    assert_eq!(t.sample(100.0), at);
}

#[test]
fn tween_set_jumps_without_transition() {
    let mut t = Tween::new(450.0, 0.35, Ease::QuadOut);
    t.retarget(0.0, 800.0);
    t.set(100.0);
    assert_eq!(t.sample(10.0), 100.0);
    assert!(!t.is_active(10.0));
}
