//! Domain Layer
//!
//! Contains the persisted document, checklist identities and the read-only
//! reference data. This layer has NO browser dependencies.

mod error;
mod keys;
mod bucket;
mod state;
mod reference;
mod route;

pub use error::{StoreError, StoreResult};
pub use keys::{CheckKey, KeyParseError, PriceKey, PriceLedger};
pub use bucket::{StorageBucket, StorageSlot};
pub use state::{PersistedState, STORAGE_KEY};
pub use reference::{Exercise, Nutrition, Recipe, ReferenceData, ScheduleEntry, SupplementLists};
pub use route::{NavTab, Route};
