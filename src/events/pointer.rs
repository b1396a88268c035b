use crate::core::HoverField;
use crate::frame::FrameLoop;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer across the whole document. Positions are viewport
/// coordinates, matching the cached glyph centers.
pub fn listen_pointer(document: &web::Document, frame: FrameLoop<HoverField>) -> EventListener {
    EventListener::new(document, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        frame.update(|field| field.push(x, y));
    })
}
