//! Small browser-side utilities shared by the screens.
//!
//! - **User Feedback**: temporary "toast" notifications and the
//!   `ToastReporter` that routes store errors to them.
//! - **Dirty flag**: `window.app_dirty`, read by the `beforeunload` handler in
//!   `index.html` to warn before leaving with unsaved edits.
//! - **Sample cells**: turning sample JSON values into table text.

use gloo_console::error;
use js_sys::Reflect;
use serde_json::Value;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;

use common::store::ErrorReporter;

const TOAST_STYLE: &str = "position: fixed; bottom: 20px; left: 50%; transform: translateX(-50%); \
    background: rgba(0, 0, 0, 0.8); color: #fff; padding: 10px 20px; border-radius: 4px; \
    z-index: 10000; font-family: Arial, sans-serif;";

const TOAST_MILLIS: u32 = 3000;

/// Shows `message` at the bottom of the screen for a few seconds. The message
/// is set as text, never as HTML.
pub fn show_toast(message: &str) {
    if attach_toast(message).is_none() {
        error!(format!("toast not shown: {}", message));
    }
}

fn attach_toast(message: &str) -> Option<()> {
    let document = web_sys::window()?.document()?;
    let toast = document.create_element("div").ok()?;
    toast.set_text_content(Some(message));
    toast.set_attribute("style", TOAST_STYLE).ok()?;
    toast.set_attribute("role", "status").ok()?;
    document.body()?.append_child(&toast).ok()?;

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(TOAST_MILLIS).await;
        toast.remove();
    });
    Some(())
}

/// Error reporter used by the store and the screens: console plus toast.
pub struct ToastReporter;

impl ErrorReporter for ToastReporter {
    fn report(&self, message: &str) {
        error!(format!("error: {}", message));
        show_toast(&user_message(message));
    }
}

/// Maps known error codes from the API to a message for the user.
fn user_message(code: &str) -> String {
    match code {
        "NOT_FOUND" => "No se encontraron los metadatos solicitados.".to_string(),
        other => format!("Error: {}", other),
    }
}

/// Publishes whether there are unsaved edits as `window.app_dirty`.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}

/// Text shown in a sample table cell. Missing and `null` values are blank,
/// strings are shown without quotes.
pub fn sample_cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
