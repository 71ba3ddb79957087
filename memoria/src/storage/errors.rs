//! Error types for storage operations

use std::error::Error;
use std::fmt;

/// Error type for record store operations
#[derive(Debug)]
pub enum StorageError {
    /// Connection error
    Connection(String),

    /// Query error
    Query(String),

    /// Operation error
    Operation(String),

    /// Data not found
    NotFound(String),

    /// Item already exists (uniqueness constraint violation)
    AlreadyExists(String),

    /// Data rejected by a store constraint
    Validation(String),

    /// Serialization/deserialization error
    Serialization(String),

    /// Storage timeout error
    Timeout(String),

    /// Other error
    Other(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Connection(msg) => write!(f, "Connection error: {}", msg),
            StorageError::Query(msg) => write!(f, "Query error: {}", msg),
            StorageError::Operation(msg) => write!(f, "Operation error: {}", msg),
            StorageError::NotFound(msg) => write!(f, "Not found: {}", msg),
            StorageError::AlreadyExists(msg) => write!(f, "Already exists: {}", msg),
            StorageError::Validation(msg) => write!(f, "Validation error: {}", msg),
            StorageError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            StorageError::Other(msg) => write!(f, "Other error: {}", msg),
        }
    }
}

impl Error for StorageError {}

/// Convert a JSON error to a storage error
impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Convert a standard IO error to a storage error
impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Operation(err.to_string())
    }
}

// This allows StorageError to be converted to the top-level MemoriaError
impl From<StorageError> for crate::MemoriaError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(what) => crate::MemoriaError::NotFound(what),
            other => crate::MemoriaError::Storage(other.to_string()),
        }
    }
}
