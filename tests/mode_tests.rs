// Host-side tests for the hover/gravity mode controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;

const OPEN: Platform = Platform {
    orientation_supported: true,
    permission_required: false,
};
const GATED: Platform = Platform {
    orientation_supported: true,
    permission_required: true,
};
const NO_SENSOR: Platform = Platform {
    orientation_supported: false,
    permission_required: false,
};

fn controller(platform: Platform, reduced_motion: bool) -> ModeController {
    ModeController::new(constants::BREAKPOINT_PX, platform, reduced_motion)
}

/// Resolve `width` and answer `StartGravity` the way the runtime does.
fn resolve(c: &mut ModeController, width: f32, glyphs: usize) -> Vec<Effect> {
    let mut out = Vec::new();
    for fx in c.resolve(width) {
        out.push(fx);
        if let Effect::StartGravity { .. } = fx {
            out.extend(c.gravity_started(glyphs));
        }
    }
    out
}

fn listeners_exclusive(c: &ModeController) -> bool {
    !(c.pointer_listening() && c.orientation_listening())
}

#[test]
fn desktop_width_selects_hover() {
    let mut c = controller(OPEN, false);
    let fx = resolve(&mut c, 1200.0, 12);
    assert_eq!(fx, vec![Effect::StartHover, Effect::AttachPointer]);
    assert_eq!(c.mode(), ControllerMode::Hover);
    assert_eq!(c.weight_range(), Some(WeightRange::HOVER));
    assert!(c.pointer_listening());
    assert!(!c.orientation_listening());
}

#[test]
fn breakpoint_is_exclusive_for_gravity() {
    let c = controller(OPEN, false);
    assert_eq!(c.mode_for_width(990.0), ControllerMode::Gravity);
    assert_eq!(c.mode_for_width(990.9), ControllerMode::Gravity);
    assert_eq!(c.mode_for_width(991.0), ControllerMode::Hover);
    assert_eq!(c.mode_for_width(1920.0), ControllerMode::Hover);
}

#[test]
fn mobile_without_permission_gate_listens_right_away() {
    let mut c = controller(OPEN, false);
    let fx = resolve(&mut c, 600.0, 5);
    assert_eq!(
        fx,
        vec![
            Effect::StartGravity {
                range: WeightRange::GRAVITY
            },
            Effect::AttachOrientation,
        ]
    );
    assert_eq!(c.mode(), ControllerMode::Gravity);
    assert_eq!(c.permission(), PermissionState::NotRequired);
    assert!(c.orientation_listening());
    assert!(!c.prompt_visible());
}

#[test]
fn reduced_motion_narrows_gravity_range() {
    let mut c = controller(OPEN, true);
    let fx = resolve(&mut c, 600.0, 5);
    assert_eq!(
        fx[0],
        Effect::StartGravity {
            range: WeightRange { min: 300.0, max: 600.0 }
        }
    );
    assert_eq!(c.weight_range(), Some(WeightRange::GRAVITY_REDUCED));
    assert!(c.orientation_listening());
}

#[test]
fn reduced_motion_disables_hover_entirely() {
    let mut c = controller(OPEN, true);
    let fx = resolve(&mut c, 1400.0, 5);
    assert!(fx.is_empty());
    assert_eq!(c.mode(), ControllerMode::Hover);
    assert!(!c.pointer_listening());
}

#[test]
fn reduced_motion_change_restarts_the_active_mode() {
    let mut c = controller(OPEN, false);
    resolve(&mut c, 1400.0, 5);
    let fx: Vec<_> = c.set_reduced_motion(true).into_iter().collect();
    assert_eq!(fx, vec![Effect::DetachPointer, Effect::StopHover]);
    assert_eq!(c.mode(), ControllerMode::Hover);

    let fx: Vec<_> = c.set_reduced_motion(true).into_iter().collect();
    assert!(fx.is_empty());

    let fx: Vec<_> = c.set_reduced_motion(false).into_iter().collect();
    assert_eq!(fx, vec![Effect::StartHover, Effect::AttachPointer]);
}

#[test]
fn hidden_page_detaches_sensors_and_returns_without_reprompt() {
    let mut c = controller(GATED, false);
    resolve(&mut c, 600.0, 5);
    let fx = c.prompt_activated();
    let ticket = match fx[0] {
        Effect::RequestPermission { ticket } => ticket,
        other => panic!("unexpected {:?}", other),
    };
    c.permission_resolved(ticket, true);
    assert!(c.orientation_listening());

    let fx: Vec<_> = c.set_hidden(true).into_iter().collect();
    assert_eq!(fx, vec![Effect::DetachOrientation]);
    assert!(!c.orientation_listening());
    assert_eq!(c.mode(), ControllerMode::Gravity);

    let fx: Vec<_> = c.set_hidden(false).into_iter().collect();
    assert_eq!(fx, vec![Effect::AttachOrientation]);
    assert!(!c.prompt_visible());
    assert_eq!(c.permission(), PermissionState::Granted);
}

#[test]
fn hidden_page_pauses_hover_pointer() {
    let mut c = controller(OPEN, false);
    resolve(&mut c, 1400.0, 5);
    assert_eq!(c.set_hidden(true).as_slice(), &[Effect::DetachPointer]);
    assert!(c.set_hidden(true).is_empty());
    assert_eq!(c.set_hidden(false).as_slice(), &[Effect::AttachPointer]);
}

#[test]
fn starting_while_hidden_waits_for_visibility() {
    let mut c = controller(OPEN, false);
    assert!(c.set_hidden(true).is_empty());
    let fx = resolve(&mut c, 600.0, 5);
    assert_eq!(fx.len(), 1);
    assert!(!c.orientation_listening());
    assert_eq!(c.set_hidden(false).as_slice(), &[Effect::AttachOrientation]);
}

#[test]
fn shrinking_below_breakpoint_stops_hover_before_gravity() {
    let mut c = controller(OPEN, false);
    resolve(&mut c, 1200.0, 5);
    let fx = resolve(&mut c, 600.0, 5);
    assert_eq!(
        fx,
        vec![
            Effect::DetachPointer,
            Effect::StopHover,
            Effect::StartGravity {
                range: WeightRange::GRAVITY
            },
            Effect::AttachOrientation,
        ]
    );
    assert!(listeners_exclusive(&c));
}

#[test]
fn growing_past_breakpoint_stops_gravity_before_hover() {
    let mut c = controller(OPEN, false);
    resolve(&mut c, 600.0, 5);
    let fx = resolve(&mut c, 1200.0, 5);
    assert_eq!(
        fx,
        vec![
            Effect::DetachOrientation,
            Effect::StopGravity,
            Effect::StartHover,
            Effect::AttachPointer,
        ]
    );
}

#[test]
fn resize_within_a_mode_changes_nothing() {
    let mut c = controller(OPEN, false);
    resolve(&mut c, 1200.0, 5);
    assert!(resolve(&mut c, 1500.0, 5).is_empty());
    assert!(resolve(&mut c, 991.0, 5).is_empty());
}

#[test]
fn modes_never_listen_together() {
    let mut c = controller(OPEN, false);
    for (i, width) in [1200.0, 600.0, 990.0, 991.0, 320.0, 2000.0, 700.0]
        .iter()
        .enumerate()
    {
        resolve(&mut c, *width, 3);
        if i % 2 == 0 {
            c.set_hidden(true);
            assert!(listeners_exclusive(&c));
            c.set_hidden(false);
        }
        assert!(listeners_exclusive(&c));
    }
}

#[test]
fn gated_platform_shows_prompt_and_waits_for_tap() {
    let mut c = controller(GATED, false);
    let fx = resolve(&mut c, 600.0, 5);
    assert_eq!(fx.last(), Some(&Effect::ShowPermissionPrompt));
    assert!(c.prompt_visible());
    assert!(!c.orientation_listening());
    assert_eq!(c.permission(), PermissionState::Pending);

    let fx = c.prompt_activated();
    assert_eq!(fx.as_slice(), &[Effect::RequestPermission { ticket: 1 }]);
    // a second tap while the request is out does nothing
    assert!(c.prompt_activated().is_empty());

    let fx = c.permission_resolved(1, true);
    assert_eq!(
        fx.as_slice(),
        &[Effect::RemovePermissionPrompt, Effect::AttachOrientation]
    );
    assert!(c.orientation_listening());
    assert!(!c.prompt_visible());
}

#[test]
fn denied_permission_leaves_gravity_inert() {
    let mut c = controller(GATED, false);
    resolve(&mut c, 600.0, 5);
    c.prompt_activated();
    let fx = c.permission_resolved(1, false);
    assert_eq!(fx.as_slice(), &[Effect::RemovePermissionPrompt]);
    assert_eq!(c.permission(), PermissionState::Denied);
    assert!(!c.orientation_listening());

    // no prompt on re-entry and nothing on visibility changes
    resolve(&mut c, 1200.0, 5);
    let fx = resolve(&mut c, 600.0, 5);
    assert!(!fx.contains(&Effect::ShowPermissionPrompt));
    assert!(!fx.contains(&Effect::AttachOrientation));
    c.set_hidden(true);
    assert!(c.set_hidden(false).is_empty());
}

#[test]
fn failed_request_offers_the_prompt_again_later() {
    let mut c = controller(GATED, false);
    resolve(&mut c, 600.0, 5);
    assert_eq!(c.prompt_activated().as_slice(), &[Effect::RequestPermission { ticket: 1 }]);
    let fx = c.permission_failed(1);
    assert_eq!(fx.as_slice(), &[Effect::RemovePermissionPrompt]);
    assert_eq!(c.permission(), PermissionState::Pending);
    assert!(!c.orientation_listening());

    resolve(&mut c, 1200.0, 5);
    let fx = resolve(&mut c, 600.0, 5);
    assert_eq!(fx.last(), Some(&Effect::ShowPermissionPrompt));
    assert_eq!(c.prompt_activated().as_slice(), &[Effect::RequestPermission { ticket: 2 }]);
    let fx = c.permission_resolved(2, true);
    assert!(fx.contains(&Effect::AttachOrientation));
}

#[test]
fn failure_of_an_abandoned_request_is_ignored() {
    let mut c = controller(GATED, false);
    resolve(&mut c, 600.0, 5);
    c.prompt_activated();
    resolve(&mut c, 1200.0, 5);
    assert!(c.permission_failed(1).is_empty());
    assert_eq!(c.permission(), PermissionState::Pending);
    assert!(c.pointer_listening());
}

#[test]
fn late_permission_answer_after_leaving_gravity_is_ignored() {
    let mut c = controller(GATED, false);
    resolve(&mut c, 600.0, 5);
    c.prompt_activated();
    resolve(&mut c, 1200.0, 5);
    assert!(c.pointer_listening());

    let fx = c.permission_resolved(1, true);
    assert!(fx.is_empty());
    assert!(!c.orientation_listening());
    assert!(c.pointer_listening());
    // the platform answer itself still counts next time around
    assert_eq!(c.permission(), PermissionState::Granted);
    let fx = resolve(&mut c, 600.0, 5);
    assert!(fx.contains(&Effect::AttachOrientation));
    assert!(!fx.contains(&Effect::ShowPermissionPrompt));
}

#[test]
fn tickets_increase_per_request() {
    let mut c = controller(GATED, false);
    resolve(&mut c, 600.0, 5);
    assert_eq!(c.prompt_activated().as_slice(), &[Effect::RequestPermission { ticket: 1 }]);
    resolve(&mut c, 1200.0, 5);
    resolve(&mut c, 600.0, 5);
    assert!(c.prompt_visible());
    assert_eq!(c.prompt_activated().as_slice(), &[Effect::RequestPermission { ticket: 2 }]);
    // the answer to the abandoned first request does not settle the second
    assert!(c.permission_resolved(1, true).is_empty());
    let fx = c.permission_resolved(2, true);
    assert!(fx.contains(&Effect::AttachOrientation));
}

#[test]
fn prompt_tap_outside_gravity_does_nothing() {
    let mut c = controller(GATED, false);
    resolve(&mut c, 1200.0, 5);
    assert!(c.prompt_activated().is_empty());
}

#[test]
fn no_glyphs_keeps_gravity_inert() {
    let mut c = controller(OPEN, false);
    let fx = resolve(&mut c, 600.0, 0);
    assert_eq!(
        fx,
        vec![
            Effect::StartGravity {
                range: WeightRange::GRAVITY
            },
            Effect::StopGravity,
        ]
    );
    assert_eq!(c.mode(), ControllerMode::Gravity);
    assert!(!c.orientation_listening());
    assert!(c.set_hidden(true).is_empty());
    assert!(c.set_hidden(false).is_empty());
    // leaving does not stop the session twice
    assert_eq!(resolve(&mut c, 1200.0, 0), vec![Effect::StartHover, Effect::AttachPointer]);
}

#[test]
fn missing_orientation_support_keeps_gravity_inert() {
    let mut c = controller(NO_SENSOR, false);
    let fx = resolve(&mut c, 600.0, 5);
    assert_eq!(fx.last(), Some(&Effect::StopGravity));
    assert!(!c.orientation_listening());
    assert!(!c.prompt_visible());
}

#[test]
fn teardown_is_idempotent() {
    let mut c = controller(GATED, false);
    resolve(&mut c, 600.0, 5);
    let fx = c.teardown();
    assert_eq!(
        fx.as_slice(),
        &[Effect::RemovePermissionPrompt, Effect::StopGravity]
    );
    assert_eq!(c.mode(), ControllerMode::Inactive);
    assert_eq!(c.weight_range(), None);
    assert!(c.teardown().is_empty());
    assert!(c.prompt_activated().is_empty());
}
