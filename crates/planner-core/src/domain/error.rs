//! Domain Errors
//!
//! Failures surfaced by the persistence layer. None of them are fatal to the
//! app: callers log and keep the in-memory document.

use thiserror::Error;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key-value backend could not be reached (private mode, no window)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the write (quota, security policy)
    #[error("storage write failed: {0}")]
    Write(String),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
