//! Clipboard Commands
//!
//! Async Clipboard API first, hidden-textarea `execCommand("copy")` second.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::js_error;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    async fn clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

/// Copy text; returns whether either path succeeded
pub async fn copy_to_clipboard(text: &str) -> bool {
    match clipboard_write_text(text).await {
        Ok(_) => true,
        Err(e) => {
            log::debug!("clipboard API unavailable ({}), trying selection copy", js_error(e));
            copy_with_selection(text).unwrap_or_else(|e| {
                log::warn!("selection copy failed: {}", e);
                false
            })
        }
    }
}

fn copy_with_selection(text: &str) -> Result<bool, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let textarea: web_sys::HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "textarea cast failed".to_string())?;
    textarea.set_value(text);
    let style = textarea.style();
    style.set_property("position", "fixed").map_err(js_error)?;
    style.set_property("top", "-9999px").map_err(js_error)?;

    body.append_child(&textarea).map_err(js_error)?;
    let _ = textarea.focus();
    textarea.select();

    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .ok_or("not an HTML document")?
        .exec_command("copy")
        .map_err(js_error);
    textarea.remove();
    copied
}
