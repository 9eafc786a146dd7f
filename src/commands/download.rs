//! Download Commands
//!
//! Save generated text as a file through a temporary object URL.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};

use super::js_error;

/// Delay before the object URL is released, so the download can start
const REVOKE_DELAY_MS: u32 = 500;

pub fn download_text(filename: &str, text: &str, mime: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "anchor cast failed".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    anchor.remove();

    spawn_local(async move {
        TimeoutFuture::new(REVOKE_DELAY_MS).await;
        let _ = web_sys::Url::revoke_object_url(&url);
    });
    Ok(())
}
