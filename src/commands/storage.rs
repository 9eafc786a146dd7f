//! localStorage Backend
//!
//! `KeyValueStorage` over `window.localStorage`. The handle is looked up on
//! every call so the store itself stays `Send + Sync` for reactive signals.

use planner_core::{KeyValueStorage, StoreError, StoreResult};

use super::js_error;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> StoreResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|e| StoreError::Unavailable(js_error(e)))?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(js_error(e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(js_error(e)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use planner_core::{CheckKey, StateStore};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TEST_KEY: &str = "master_planner_state_test";

    #[wasm_bindgen_test]
    fn test_local_storage_roundtrip() {
        let mut storage = BrowserStorage;
        storage.set_item(TEST_KEY, "hello").unwrap();
        assert_eq!(storage.get_item(TEST_KEY).unwrap().as_deref(), Some("hello"));
    }

    #[wasm_bindgen_test]
    fn test_state_store_survives_reload() {
        let mut store = StateStore::load_with_key(BrowserStorage, TEST_KEY);
        store.reset().unwrap();
        store.toggle_check(&CheckKey::Grocery(2)).unwrap();

        let reloaded = StateStore::load_with_key(BrowserStorage, TEST_KEY);
        assert!(reloaded.state().is_checked(&CheckKey::Grocery(2)));
    }
}
