//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with this identifier is already present
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The store cannot serve the request (poisoned lock, lost backend)
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether this error reflects a logical conflict rather than an
    /// infrastructure failure
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::DuplicateKey(_))
    }
}
