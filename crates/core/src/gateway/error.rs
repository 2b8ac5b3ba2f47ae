use thiserror::Error;

/// Problems with the inbound request itself, as opposed to backend faults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The gateway did not populate a path parameter the route requires.
    #[error("Missing path parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Maps a [`RequestError`] to an HTTP status code.
///
/// - `MissingParameter` -> 500 (routing misconfiguration, not the caller's fault)
/// - `MissingField` -> 400 (Bad Request)
/// - `MalformedBody` -> 400 (Bad Request)
pub fn request_error_to_status_code(error: &RequestError) -> u16 {
    match error {
        RequestError::MissingParameter(_) => 500,
        RequestError::MissingField(_) => 400,
        RequestError::MalformedBody(_) => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_maps_to_500() {
        let error = RequestError::MissingParameter("object_id");
        assert_eq!(request_error_to_status_code(&error), 500);
        assert_eq!(error.to_string(), "Missing path parameter: object_id");
    }

    #[test]
    fn test_missing_field_maps_to_400() {
        let error = RequestError::MissingField("make");
        assert_eq!(request_error_to_status_code(&error), 400);
        assert_eq!(error.to_string(), "Missing required field: make");
    }

    #[test]
    fn test_malformed_body_maps_to_400() {
        let error = RequestError::MalformedBody("EOF while parsing".to_string());
        assert_eq!(request_error_to_status_code(&error), 400);
        assert_eq!(
            error.to_string(),
            "Malformed request body: EOF while parsing"
        );
    }
}
