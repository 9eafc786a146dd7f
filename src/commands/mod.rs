//! Browser Command Wrappers
//!
//! Thin bindings to the browser APIs the planner needs, organized by concern.
//! Fallible calls return `Result<_, String>`; "did it work" calls return `bool`.

mod storage;
mod data;
mod window;
mod clipboard;
mod share;
mod download;
mod service_worker;

use wasm_bindgen::JsValue;

// Re-export all public items
pub use storage::*;
pub use data::*;
pub use window::*;
pub use clipboard::*;
pub use share::*;
pub use download::*;
pub use service_worker::*;

/// Best-effort text for a thrown JS value
fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
