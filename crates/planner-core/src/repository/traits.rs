//! Repository Layer - Core Traits
//!
//! The persisted document lives in a flat string key-value store. In the
//! browser that is `localStorage`; tests use `MemoryStorage`.

use crate::domain::StoreResult;

/// Minimal synchronous key-value backend
pub trait KeyValueStorage {
    /// Read a value; `Ok(None)` when the key was never written
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;
}
