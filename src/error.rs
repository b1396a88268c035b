use wasm_bindgen::JsValue;

/// Ways the effect can fail to come up. None of them reach the host page:
/// the runtime logs them and leaves the effect inactive.
#[derive(Debug, thiserror::Error)]
pub enum EffectError {
    #[error("{0} is not available on this platform")]
    Unsupported(&'static str),
    #[error("motion access was not granted")]
    PermissionDenied,
    #[error("no glyphs to animate")]
    NoGlyphs,
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for EffectError {
    fn from(value: JsValue) -> Self {
        EffectError::Dom(format!("{:?}", value))
    }
}
