//! Persistence error model shared by every repository abstraction.

use thiserror::Error;

/// Result type used across the repository layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a backing store.
///
/// "Not found" is **not** an error: lookups return `Option` and absence travels
/// as `Ok(None)`. This enum covers genuine backend failures only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backing store failed while serving the request.
    #[error("store failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
