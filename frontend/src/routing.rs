//! Browser history glue for `common::navigation`.

use gloo_console::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::Callback;

use common::model::meta::Metadata;
use common::navigation::{Navigation, Route, TransitionState};

/// Route of the current `window.location`.
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::NotFound)
}

/// Pushes `navigation` onto the history. The state is stored as a JSON
/// string so it survives reloads of the target screen.
pub fn push(navigation: &Navigation) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let history = window.history().map_err(js_error)?;
    let state = serde_json::to_string(&navigation.state).map_err(|e| e.to_string())?;
    history
        .push_state_with_url(&JsValue::from_str(&state), "", Some(&navigation.pathname))
        .map_err(js_error)
}

/// Metadata carried by the current history entry, if any.
pub fn history_meta() -> Option<Metadata> {
    let state = web_sys::window()?.history().ok()?.state().ok()?;
    let raw = state.as_string()?;
    match serde_json::from_str::<TransitionState>(&raw) {
        Ok(transition) => Some(transition.meta),
        Err(e) => {
            warn!(format!("ignoring history state: {}", e));
            None
        }
    }
}

/// Calls `on_change` on every `popstate`. The returned closure must be kept
/// alive for as long as the listener should stay registered.
pub fn listen_popstate(on_change: Callback<()>) -> Option<Closure<dyn FnMut(web_sys::Event)>> {
    let window = web_sys::window()?;
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| on_change.emit(()));
    window
        .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
        .ok()?;
    Some(closure)
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
