//! Persistence error types

use thiserror::Error;

/// Errors raised by a key-value store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Key contains characters that cannot name a file
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Lock acquisition failed
    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Persisted widget data was absent or could not be decoded.
///
/// Never surfaced to callers: restore treats it as "no saved widgets".
#[derive(Error, Debug)]
pub enum StorageParseError {
    #[error("No saved widgets under key {0:?}")]
    Absent(String),

    #[error("Saved widgets under key {key:?} are malformed: {error}")]
    Malformed { key: String, error: String },

    #[error("Saved widgets under key {key:?} could not be read: {error}")]
    Unreadable { key: String, error: String },
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
