//! Store error types.

use thiserror::Error;

/// Errors that can occur reading or writing persisted state.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying filesystem failure.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted bytes exist but cannot be encoded or decoded.
    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Key contains path separators or is empty.
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
}

impl StoreError {
    /// True when a stored entry was found but could not be decoded.
    ///
    /// Callers use this to tell corrupt data (degrade to the empty
    /// default) from real I/O failures.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Serde(_))
    }
}
