#![cfg(target_arch = "wasm32")]
//! Variable font weight driven by pointer proximity (desktop) or device tilt
//! (mobile) for every `[data-animate="font-weight"]` block on the page.

use gloo::events::EventListener;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub mod constants;
pub mod core;
pub mod dom;
pub mod error;
mod events;
pub mod frame;
pub mod glyphs;
mod overlay;
mod permission;
mod runtime;

use runtime::{Runtime, SharedRuntime};

thread_local! {
    static RUNTIME: RefCell<Option<SharedRuntime>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glyph-weight starting");

    if let Err(e) = init() {
        log::warn!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
    Ok(())
}

fn boot() {
    RUNTIME.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(Runtime::install(crate::core::Settings::default()));
        }
    });
}

/// Tear the effect down: listeners removed, prompt gone, glyphs left at rest.
#[wasm_bindgen]
pub fn teardown() {
    let rt = RUNTIME.with(|slot| slot.borrow_mut().take());
    if let Some(rt) = rt {
        rt.borrow_mut().shutdown();
        log::info!("[mode] torn down");
    }
}

/// Re-measure glyph positions, as after a `fitline:updated` event.
#[wasm_bindgen]
pub fn refresh_layout() {
    RUNTIME.with(|slot| {
        if let Some(rt) = slot.borrow().as_ref() {
            if let Ok(rt) = rt.try_borrow() {
                rt.refresh_layout();
            }
        }
    });
}
