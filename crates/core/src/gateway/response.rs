use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::{AttributeMap, Item};

/// Message returned when a requested item does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Item not found.";

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// Body used when a response body cannot be serialized.
const SERIALIZATION_FAILURE_BODY: &str =
    r#"{"success":false,"message":"Failed to serialize response body"}"#;

/// Outbound response in the gateway's proxy shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub is_base64_encoded: bool,
    pub headers: BTreeMap<String, String>,
    pub status_code: u16,
    pub body: String,
}

impl GatewayResponse {
    /// Formats a 200 response.
    pub fn ok<T: Serialize>(body: &T) -> Self {
        format_response(body, 200)
    }

    /// Parses the body back into JSON.
    pub fn body_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}

/// Builds a gateway response with a JSON content type.
///
/// Storage decimals inside `body` serialize as JSON floats (see
/// [`crate::item::AttributeValue`]).
pub fn format_response<T: Serialize>(body: &T, status_code: u16) -> GatewayResponse {
    let (status_code, body) = match serde_json::to_string(body) {
        Ok(body) => (status_code, body),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response body");
            (500, SERIALIZATION_FAILURE_BODY.to_string())
        }
    };

    GatewayResponse {
        is_base64_encoded: false,
        headers: BTreeMap::from([(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())]),
        status_code,
        body,
    }
}

/// Every body shape a handler responds with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// `{success: true, item}` after a creation.
    Created { success: bool, item: Item },
    /// `{item}` for a single full item.
    Found { item: Item },
    /// `{item}` holding only the attributes an update changed.
    Updated { item: AttributeMap },
    /// `{items}` for a scan.
    Items { items: Vec<Item> },
    /// `{success, message?}` for deletions and every error.
    Status {
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl ResponseBody {
    pub fn created(item: Item) -> Self {
        Self::Created {
            success: true,
            item,
        }
    }

    pub fn found(item: Item) -> Self {
        Self::Found { item }
    }

    pub fn updated(item: AttributeMap) -> Self {
        Self::Updated { item }
    }

    pub fn items(items: Vec<Item>) -> Self {
        Self::Items { items }
    }

    pub fn success() -> Self {
        Self::Status {
            success: true,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Status {
            success: false,
            message: Some(message.into()),
        }
    }
}
