//! Share Commands
//!
//! Native share sheet (Web Share API) where the browser offers one.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::js_error;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = navigator, js_name = share)]
    async fn navigator_share(data: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct ShareArgs<'a> {
    title: &'a str,
    text: &'a str,
}

fn share_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w.navigator(), &JsValue::from_str("share")).unwrap_or(false))
        .unwrap_or(false)
}

/// Open the share sheet; false when unsupported, dismissed or failed
pub async fn share_text(title: &str, text: &str) -> bool {
    if !share_supported() {
        return false;
    }
    let args = match serde_wasm_bindgen::to_value(&ShareArgs { title, text }) {
        Ok(args) => args,
        Err(e) => {
            log::warn!("Failed to serialize share args: {}", e);
            return false;
        }
    };
    match navigator_share(args).await {
        Ok(_) => true,
        Err(e) => {
            log::debug!("share sheet closed without sharing: {}", js_error(e));
            false
        }
    }
}
