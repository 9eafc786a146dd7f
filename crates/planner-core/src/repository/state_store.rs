//! State Store
//!
//! Owns the in-memory `PersistedState` and its storage backend. Every
//! mutating operation writes the full document back before returning.

use log::{debug, warn};

use super::traits::KeyValueStorage;
use crate::domain::{
    CheckKey, PersistedState, PriceKey, StorageBucket, StoreResult, STORAGE_KEY,
};

#[derive(Debug, Clone)]
pub struct StateStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    state: PersistedState,
}

impl<S: KeyValueStorage> StateStore<S> {
    /// Load from the default storage key
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, STORAGE_KEY)
    }

    /// Load the document stored under `key`.
    ///
    /// Never fails: a missing, unreadable or malformed document yields the
    /// defaults. A readable document is merged over the defaults one level
    /// deep, and a single malformed field only resets that field.
    pub fn load_with_key(storage: S, key: &str) -> Self {
        let state = match storage.get_item(key) {
            Ok(Some(raw)) => match PersistedState::from_json(&raw) {
                Ok(state) => state,
                Err(e) => {
                    warn!("discarding malformed saved state under {}: {}", key, e);
                    PersistedState::default()
                }
            },
            Ok(None) => {
                debug!("no saved state under {}, using defaults", key);
                PersistedState::default()
            }
            Err(e) => {
                warn!("could not read saved state: {}", e);
                PersistedState::default()
            }
        };

        Self {
            storage,
            key: key.to_string(),
            state,
        }
    }

    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Serialize the whole document and write it to the storage key
    pub fn save(&mut self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.state)?;
        self.storage.set_item(&self.key, &json)
    }

    /// Apply a change and persist it. The in-memory change sticks even if
    /// the write fails.
    pub fn mutate<R>(&mut self, f: impl FnOnce(&mut PersistedState) -> R) -> StoreResult<R> {
        let result = f(&mut self.state);
        self.save()?;
        Ok(result)
    }

    /// Replace everything with a fresh copy of the defaults and persist it
    pub fn reset(&mut self) -> StoreResult<()> {
        debug!("resetting all planner state");
        self.mutate(|state| *state = PersistedState::default())
    }

    /// Clear one storage-checklist bucket and persist
    pub fn reset_bucket(&mut self, bucket: StorageBucket) -> StoreResult<()> {
        debug!("resetting storage checklist {}", bucket.as_str());
        self.mutate(|state| state.clear_bucket(bucket))
    }

    /// Flip a checkbox; returns the new value
    pub fn toggle_check(&mut self, key: &CheckKey) -> StoreResult<bool> {
        self.mutate(|state| state.toggle_check(key))
    }

    /// Store raw price text; returns the ledger's new running total
    pub fn set_price(&mut self, key: &PriceKey, raw: &str) -> StoreResult<f64> {
        self.mutate(|state| {
            state.set_price(key, raw);
            state.total(key.ledger())
        })
    }

    /// Flip a storage-checklist slot; returns the new value
    pub fn toggle_stored(&mut self, bucket: StorageBucket, key: &str) -> StoreResult<bool> {
        self.mutate(|state| state.toggle_stored(bucket, key))
    }
}
