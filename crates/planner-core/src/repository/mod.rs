//! Repository Layer
//!
//! Storage abstraction and the state store that owns the persisted document.

mod traits;
mod memory;
mod state_store;

#[cfg(test)]
mod tests;

pub use traits::KeyValueStorage;
pub use memory::MemoryStorage;
pub use state_store::StateStore;
