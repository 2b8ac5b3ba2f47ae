use thiserror::Error;

use crate::item::ItemError;

/// Errors that can occur during repository operations.
///
/// Every variant other than `NotFound` is a backend fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Item not found: {id}")]
    NotFound { id: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<ItemError> for RepositoryError {
    fn from(err: ItemError) -> Self {
        RepositoryError::InvalidData(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Errors that can occur while uploading to the object store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectStoreError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
    #[error("Upload to {bucket}/{key} failed: {message}")]
    UploadFailed {
        bucket: String,
        key: String,
        message: String,
    },
}
