use crate::constants::{PERMISSION_BUTTON_ID, PERMISSION_BUTTON_LABEL};
use crate::error::EffectError;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

const PROMPT_STYLE: &str = "position:fixed;inset:auto 12px 12px auto;z-index:9999;\
padding:10px 14px;border-radius:9999px;border:1px solid rgba(255,255,255,0.2);\
background:rgba(255,255,255,0.08);color:#fff;backdrop-filter:blur(8px);\
-webkit-backdrop-filter:blur(8px);font-size:14px;cursor:pointer";

/// The "Enable Motion" button. Removed from the page when dropped.
pub struct PermissionPrompt {
    button: web::HtmlButtonElement,
    _click: EventListener,
}

impl PermissionPrompt {
    /// Append the button to `<body>`; `on_tap` fires at most once.
    pub fn show(
        document: &web::Document,
        on_tap: impl FnOnce() + 'static,
    ) -> Result<Self, EffectError> {
        let body = document.body().ok_or(EffectError::Unsupported("document.body"))?;
        let button = document
            .create_element("button")?
            .dyn_into::<web::HtmlButtonElement>()
            .map_err(|_| EffectError::Dom("created element is not a button".into()))?;
        button.set_id(PERMISSION_BUTTON_ID);
        button.set_type("button");
        button.set_text_content(Some(PERMISSION_BUTTON_LABEL));
        _ = button.set_attribute("style", PROMPT_STYLE);
        let click = EventListener::once(&button, "click", move |_| on_tap());
        body.append_child(&button)?;
        Ok(Self {
            button,
            _click: click,
        })
    }
}

impl Drop for PermissionPrompt {
    fn drop(&mut self) {
        self.button.remove();
    }
}
