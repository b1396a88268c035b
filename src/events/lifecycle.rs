use crate::constants::REDUCED_MOTION_QUERY;
use crate::dom;
use crate::runtime::{with_runtime, Runtime};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Weak;
use web_sys as web;

/// Page-wide subscriptions that outlive any single mode: breakpoint,
/// visibility and the reduced-motion preference.
pub fn listen_page(me: &Weak<RefCell<Runtime>>) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    if let Some(window) = web::window() {
        let me = me.clone();
        listeners.push(EventListener::new(&window, "resize", move |_| {
            let width = dom::viewport().width;
            with_runtime(&me, |rt| rt.handle(|c| c.resolve(width)));
        }));
    }

    if let Some(document) = dom::window_document() {
        let me = me.clone();
        let doc = document.clone();
        listeners.push(EventListener::new(&document, "visibilitychange", move |_| {
            let hidden = doc.hidden();
            with_runtime(&me, |rt| rt.handle(|c| c.set_hidden(hidden)));
        }));
    }

    if let Some(query) = dom::media_query(REDUCED_MOTION_QUERY) {
        let me = me.clone();
        let mql = query.clone();
        listeners.push(EventListener::new(&query, "change", move |_| {
            let reduced = mql.matches();
            with_runtime(&me, |rt| rt.handle(|c| c.set_reduced_motion(reduced)));
        }));
    }

    listeners
}
