//! Failure responses shared by every handler.

use objects_core::gateway::{
    format_response, request_error_to_status_code, GatewayResponse, RequestError, ResponseBody,
};
use objects_core::storage::{
    repository_error_message, repository_error_to_status_code, RepositoryError,
};

/// Formats a rejected request as `{success: false, message}`.
pub fn request_error_response(error: &RequestError) -> GatewayResponse {
    let status = request_error_to_status_code(error);
    if status >= 500 {
        tracing::error!(status, error = %error, "Request rejected");
    } else {
        tracing::warn!(status, error = %error, "Request rejected");
    }
    format_response(&ResponseBody::failure(error.to_string()), status)
}

/// Formats a storage failure as `{success: false, message}`.
///
/// `NotFound` carries the fixed not-found message; backend faults carry the
/// backend's own message.
pub fn repository_error_response(error: &RepositoryError) -> GatewayResponse {
    let status = repository_error_to_status_code(error);
    if status >= 500 {
        tracing::error!(status, error = %error, "Storage operation failed");
    } else {
        tracing::debug!(status, error = %error, "Storage lookup missed");
    }
    format_response(&ResponseBody::failure(repository_error_message(error)), status)
}
