//! Repository Integration Tests
//!
//! StateStore against in-memory and deliberately broken storage.

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::domain::{
        CheckKey, PersistedState, PriceKey, PriceLedger, StorageBucket, StoreError, StoreResult,
        STORAGE_KEY,
    };
    use crate::repository::{KeyValueStorage, MemoryStorage, StateStore};

    /// Backend whose reads and writes always fail
    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Unavailable("no window".into()))
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Write("quota exceeded".into()))
        }
    }

    fn saved_json(store: &StateStore<MemoryStorage>) -> Value {
        let raw = store.storage().raw(STORAGE_KEY).expect("document was saved");
        serde_json::from_str(raw).expect("saved document is JSON")
    }

    #[test]
    fn test_load_without_saved_document_is_default() {
        let store = StateStore::load(MemoryStorage::new());
        assert_eq!(store.state(), &PersistedState::default());
    }

    #[test]
    fn test_load_corrupted_document_is_default() {
        for raw in ["{not json", "[]", "null", r#"{"checks": 5}"#] {
            let store = StateStore::load(MemoryStorage::with_item(STORAGE_KEY, raw));
            assert_eq!(store.state(), &PersistedState::default(), "input {}", raw);
        }
    }

    #[test]
    fn test_load_unreadable_storage_is_default() {
        let store = StateStore::load(BrokenStorage);
        assert_eq!(store.state(), &PersistedState::default());
    }

    #[test]
    fn test_load_merges_missing_top_level_fields() {
        let saved = json!({
            "checks": {"groc:1": true},
            "groceryPrices": {"grocPrice:0": "1.00"}
        });
        let storage = MemoryStorage::with_item(STORAGE_KEY, &saved.to_string());
        let store = StateStore::load(storage);
        let defaults = PersistedState::default();

        assert!(store.state().is_checked(&CheckKey::Grocery(1)));
        // Present fields replace the default wholesale
        assert_eq!(store.state().grocery_prices.len(), 1);
        // Missing fields come from the defaults
        assert_eq!(store.state().supplement_prices, defaults.supplement_prices);
        assert_eq!(store.state().storage_checklists, defaults.storage_checklists);
    }

    #[test]
    fn test_load_mistyped_field_keeps_the_rest() {
        let saved = json!({
            "checks": {"groc:1": true, "sched:Monday:0": true},
            "groceryPrices": {"grocPrice:1": "4.25"},
            "notes": null
        });
        let storage = MemoryStorage::with_item(STORAGE_KEY, &saved.to_string());
        let mut store = StateStore::load(storage);

        assert!(store.state().is_checked(&CheckKey::Grocery(1)));
        assert!(store.state().is_checked(&CheckKey::schedule("Monday", 0)));
        assert_eq!(store.state().price(&PriceKey::Grocery(1)), "4.25");
        assert!(store.state().notes.is_empty());

        store.toggle_check(&CheckKey::Grocery(2)).unwrap();
        assert_eq!(saved_json(&store)["notes"], json!({}));
        assert_eq!(saved_json(&store)["checks"]["groc:1"], true);
    }

    #[test]
    fn test_unknown_fields_survive_a_save() {
        let saved = json!({"checks": {}, "theme": "dark"});
        let storage = MemoryStorage::with_item(STORAGE_KEY, &saved.to_string());
        let mut store = StateStore::load(storage);
        store.toggle_check(&CheckKey::Grocery(0)).unwrap();

        assert_eq!(saved_json(&store)["theme"], "dark");
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let mut store = StateStore::load(MemoryStorage::new());
        store.toggle_check(&CheckKey::schedule("Monday", 2)).unwrap();
        store.toggle_check(&CheckKey::workout("Workout A", 0)).unwrap();
        store.set_price(&PriceKey::Skincare(1), "$4").unwrap();
        store.toggle_stored(StorageBucket::Supplements, "bathroom").unwrap();
        let before = store.state().clone();

        let reloaded = StateStore::load(store.into_storage());
        assert_eq!(reloaded.state(), &before);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut store = StateStore::load(MemoryStorage::new());
        assert!(store.storage().raw(STORAGE_KEY).is_none());

        store.toggle_check(&CheckKey::Grocery(3)).unwrap();
        assert_eq!(saved_json(&store)["checks"]["groc:3"], true);

        store.set_price(&PriceKey::Grocery(3), "2.00").unwrap();
        assert_eq!(saved_json(&store)["groceryPrices"]["grocPrice:3"], "2.00");

        store.toggle_stored(StorageBucket::Grocery, "freezer").unwrap();
        assert_eq!(saved_json(&store)["storageChecklists"]["grocery"]["freezer"], true);
    }

    #[test]
    fn test_toggle_parity() {
        let mut store = StateStore::load(MemoryStorage::new());
        let key = CheckKey::Supplement(4);
        for _ in 0..5 {
            store.toggle_check(&key).unwrap();
        }
        assert!(store.state().is_checked(&key));
        store.toggle_check(&key).unwrap();
        assert!(!store.state().is_checked(&key));
    }

    #[test]
    fn test_set_price_returns_running_total() {
        let mut store = StateStore::load(MemoryStorage::new());
        store.mutate(|s| s.supplement_prices.clear()).unwrap();

        assert_eq!(store.set_price(&PriceKey::Supplement(0), "10").unwrap(), 10.0);
        assert_eq!(store.set_price(&PriceKey::Skincare(0), "2.5").unwrap(), 12.5);
        assert_eq!(store.set_price(&PriceKey::Skincare(1), "n/a").unwrap(), 12.5);
        assert_eq!(store.state().price(&PriceKey::Skincare(1)), "n/a");
        assert_eq!(store.state().total(PriceLedger::Supplements), 12.5);
    }

    #[test]
    fn test_reset_bucket_leaves_everything_else() {
        let mut store = StateStore::load(MemoryStorage::new());
        store.toggle_stored(StorageBucket::Grocery, "pantry").unwrap();
        store.toggle_stored(StorageBucket::Supplements, "travel_bag").unwrap();
        store.toggle_check(&CheckKey::Grocery(0)).unwrap();
        store.set_price(&PriceKey::Grocery(0), "7.77").unwrap();
        let before = store.state().clone();

        store.reset_bucket(StorageBucket::Grocery).unwrap();

        let after = store.state();
        assert!(after.storage_checklists["grocery"].values().all(|v| !v));
        assert_eq!(after.storage_checklists["supplements"], before.storage_checklists["supplements"]);
        assert_eq!(after.checks, before.checks);
        assert_eq!(after.grocery_prices, before.grocery_prices);
        assert_eq!(after.supplement_prices, before.supplement_prices);
        assert_eq!(saved_json(&store)["storageChecklists"]["grocery"]["pantry"], false);
    }

    #[test]
    fn test_reset_bucket_missing_from_document() {
        let saved = json!({"storageChecklists": {"grocery": {"pantry": true}}});
        let storage = MemoryStorage::with_item(STORAGE_KEY, &saved.to_string());
        let mut store = StateStore::load(storage);

        store.reset_bucket(StorageBucket::Supplements).unwrap();
        assert!(store.state().is_stored(StorageBucket::Grocery, "pantry"));
        assert!(!store.state().storage_checklists.contains_key("supplements"));
    }

    #[test]
    fn test_reset_restores_defaults_and_persists() {
        let mut store = StateStore::load(MemoryStorage::new());
        store.toggle_check(&CheckKey::Grocery(0)).unwrap();
        store.set_price(&PriceKey::Grocery(0), "0").unwrap();

        store.reset().unwrap();

        assert_eq!(store.state(), &PersistedState::default());
        let reloaded = StateStore::load(store.into_storage());
        assert_eq!(reloaded.state(), &PersistedState::default());
    }

    #[test]
    fn test_failed_write_keeps_in_memory_change() {
        let mut store = StateStore::load(BrokenStorage);
        let result = store.toggle_check(&CheckKey::Grocery(0));

        assert!(matches!(result, Err(StoreError::Write(_))));
        assert!(store.state().is_checked(&CheckKey::Grocery(0)));
    }

    #[test]
    fn test_custom_storage_key() {
        let mut store = StateStore::load_with_key(MemoryStorage::new(), "planner_test");
        store.toggle_check(&CheckKey::Grocery(0)).unwrap();
        assert!(store.storage().raw("planner_test").is_some());
        assert!(store.storage().raw(STORAGE_KEY).is_none());
    }
}
