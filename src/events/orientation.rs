use crate::core::{GravityField, OrientationSample};
use crate::frame::FrameLoop;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys as web;

// some browsers only fire one of the two
const ORIENTATION_EVENTS: [&str; 2] = ["deviceorientation", "deviceorientationabsolute"];

pub fn listen_orientation(
    window: &web::Window,
    frame: FrameLoop<GravityField>,
) -> Vec<EventListener> {
    ORIENTATION_EVENTS
        .iter()
        .map(|name| {
            let frame = frame.clone();
            EventListener::new_with_options(
                window,
                *name,
                EventListenerOptions {
                    phase: EventListenerPhase::Capture,
                    passive: true,
                },
                move |ev| {
                    let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
                        return;
                    };
                    let sample = OrientationSample {
                        beta: ev.beta().map(|v| v as f32),
                        gamma: ev.gamma().map(|v| v as f32),
                    };
                    frame.update(|field| {
                        field.push(sample);
                    });
                },
            )
        })
        .collect()
}
