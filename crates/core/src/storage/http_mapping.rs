//! Pure functions for mapping repository errors to HTTP responses.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use crate::gateway::NOT_FOUND_MESSAGE;

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// A missing item is the only non-fault outcome; every backend fault is a
/// 500 regardless of its cause:
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 500 (Internal Server Error)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use objects_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     id: "abc-123".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}

/// Returns the caller-facing message for a [`RepositoryError`].
///
/// Backend faults pass the backend's own message through, unprefixed.
pub fn repository_error_message(error: &RepositoryError) -> String {
    match error {
        RepositoryError::NotFound { .. } => NOT_FOUND_MESSAGE.to_string(),
        RepositoryError::ConnectionFailed(message) | RepositoryError::QueryFailed(message) => {
            message.clone()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::NotFound {
            id: "obj-123".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_connection_failed_maps_to_500() {
        let error = RepositoryError::ConnectionFailed("timeout".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_query_failed_maps_to_500() {
        let error = RepositoryError::QueryFailed("syntax error".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_serialization_maps_to_500() {
        let error = RepositoryError::Serialization("invalid JSON".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_invalid_data_maps_to_500() {
        let error = RepositoryError::InvalidData("missing object_id".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_not_found_message_is_generic() {
        let error = RepositoryError::NotFound {
            id: "obj-123".to_string(),
        };
        assert_eq!(repository_error_message(&error), "Item not found.");
    }

    #[test]
    fn test_fault_message_passes_through() {
        let error = RepositoryError::QueryFailed("Table not found".to_string());
        assert_eq!(repository_error_message(&error), "Table not found");
    }

    #[test]
    fn test_invalid_data_message_names_the_problem() {
        let error = RepositoryError::InvalidData("missing object_id".to_string());
        assert_eq!(
            repository_error_message(&error),
            "Invalid data: missing object_id"
        );
    }
}
