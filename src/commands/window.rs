//! Window Commands
//!
//! Location fragment, connectivity, alerts and local time.

use planner_core::Route;
use wasm_bindgen::JsValue;

use super::js_error;

/// Current `location.hash`, including the leading `#`
pub fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Navigate by setting `location.hash`; the `hashchange` listener re-routes
pub fn set_fragment(route: &Route) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    window.location().set_hash(&route.href()).map_err(js_error)
}

pub fn is_online() -> bool {
    web_sys::window()
        .map(|w| w.navigator().on_line())
        .unwrap_or(true)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Local date/time in the user's locale, for export headers
pub fn local_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}
