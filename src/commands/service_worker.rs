//! Offline Cache Registration
//!
//! Spawned on the wasm-bindgen task queue; needs no Leptos executor.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::js_error;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["navigator", "serviceWorker"], js_name = register)]
    async fn register(path: &str) -> Result<JsValue, JsValue>;
}

/// Fire-and-forget; unsupported browsers and failures are ignored
pub fn register_service_worker(path: &str) {
    let path = path.to_string();
    spawn_local(async move {
        match register(&path).await {
            Ok(_) => log::debug!("service worker registered at {}", path),
            Err(e) => log::debug!("service worker not registered: {}", js_error(e)),
        }
    });
}
