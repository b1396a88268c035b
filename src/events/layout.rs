use crate::constants::LAYOUT_EVENT;
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys as web;

/// Resize, scroll and text reflow all move glyphs; each one invalidates the
/// cached centers through `on_change`. gloo registers these as passive.
pub fn listen_layout(window: &web::Window, on_change: impl Fn() + 'static) -> Vec<EventListener> {
    let on_change = Rc::new(on_change);
    ["resize", "scroll", LAYOUT_EVENT]
        .into_iter()
        .map(|name| {
            let cb = on_change.clone();
            EventListener::new(window, name, move |_| cb())
        })
        .collect()
}
