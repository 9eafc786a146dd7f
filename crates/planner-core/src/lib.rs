//! Master Planner Core
//!
//! Layered architecture:
//! - domain: persisted document, checklist keys, reference data, routes
//! - repository: storage abstraction and the state store
//! - price / export: grocery totals and list export

pub mod domain;
pub mod repository;
pub mod price;
pub mod export;

pub use domain::{
    CheckKey, NavTab, PersistedState, PriceKey, PriceLedger, ReferenceData, Route,
    StorageBucket, StorageSlot, StoreError, StoreResult, STORAGE_KEY,
};
pub use repository::{KeyValueStorage, MemoryStorage, StateStore};
