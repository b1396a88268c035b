use crate::core::Platform;
use crate::error::EffectError;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn orientation_ctor() -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &"DeviceOrientationEvent".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn request_fn(ctor: &JsValue) -> Option<Function> {
    Reflect::get(ctor, &"requestPermission".into())
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
}

/// Capability check for orientation input. Gating is detected by the
/// presence of `DeviceOrientationEvent.requestPermission`, never by user agent.
pub fn platform() -> Platform {
    match orientation_ctor() {
        Some(ctor) => Platform {
            orientation_supported: true,
            permission_required: request_fn(&ctor).is_some(),
        },
        None => Platform::default(),
    }
}

/// Start the permission request. Must run synchronously inside the user
/// gesture, so the returned promise is awaited separately.
pub fn begin_request() -> Result<Promise, EffectError> {
    let ctor = orientation_ctor().ok_or(EffectError::Unsupported("DeviceOrientationEvent"))?;
    let request = request_fn(&ctor).ok_or(EffectError::Unsupported("requestPermission"))?;
    let pending = request.call0(&ctor)?;
    pending
        .dyn_into::<Promise>()
        .map_err(|_| EffectError::Dom("requestPermission did not return a promise".into()))
}

pub async fn await_answer(pending: Promise) -> Result<(), EffectError> {
    let answer = JsFuture::from(pending).await?;
    match answer.as_string().as_deref() {
        Some("granted") => Ok(()),
        _ => Err(EffectError::PermissionDenied),
    }
}
