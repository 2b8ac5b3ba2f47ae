use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use super::RequestError;

/// Path parameter carrying the item identifier.
pub const OBJECT_ID_PARAM: &str = "object_id";

/// Inbound request as delivered by the gateway.
///
/// Only the fields the handlers read are modelled; everything else in a
/// proxy event is ignored during deserialization. The gateway sends `null`
/// for absent maps, hence the `Option`s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl GatewayRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path parameter.
    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Sets a plain-text body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.is_base64_encoded = false;
        self
    }

    /// Sets a binary body, base64-encoding it the way the gateway does.
    pub fn with_binary_body(mut self, body: &[u8]) -> Self {
        self.body = Some(STANDARD.encode(body));
        self.is_base64_encoded = true;
        self
    }
}

/// Reads the `object_id` path parameter.
pub fn extract_id(request: &GatewayRequest) -> Result<&str, RequestError> {
    request
        .path_parameters
        .as_ref()
        .and_then(|params| params.get(OBJECT_ID_PARAM))
        .map(String::as_str)
        .ok_or(RequestError::MissingParameter(OBJECT_ID_PARAM))
}

/// Returns the request body as text, decoding base64 bodies.
pub fn extract_body(request: &GatewayRequest) -> Result<String, RequestError> {
    let body = request
        .body
        .as_deref()
        .ok_or_else(|| RequestError::MalformedBody("request body is empty".to_string()))?;

    if !request.is_base64_encoded {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| RequestError::MalformedBody(format!("invalid base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| RequestError::MalformedBody(format!("body is not UTF-8: {e}")))
}
