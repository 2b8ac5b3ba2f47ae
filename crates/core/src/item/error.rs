use thiserror::Error;

/// Errors raised when an attribute map does not form a valid item.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item has no object_id attribute")]
    MissingObjectId,
    #[error("Reserved attribute {0} must be a string")]
    InvalidReserved(&'static str),
    #[error("The object_id key attribute cannot be updated")]
    ImmutableKey,
}
