//! Request payloads for item operations.
//!
//! Pure parsing: the body text comes in, either a request or a
//! [`RequestError`] comes out.

use chrono::{DateTime, Utc};

use crate::gateway::RequestError;

use super::types::Item;
use super::value::{AttributeMap, AttributeValue};

/// Fields a creation payload must carry. Their values are not validated.
pub const CREATE_FIELDS: [&str; 4] = ["make", "model", "category", "year"];

/// Payload for creating a new item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItemRequest {
    pub fields: AttributeMap,
}

impl CreateItemRequest {
    /// Parses a JSON body, requiring every field in [`CREATE_FIELDS`].
    ///
    /// Extra fields are ignored. A field explicitly set to `null` counts as
    /// present.
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| RequestError::MalformedBody(e.to_string()))?;

        let serde_json::Value::Object(mut object) = value else {
            return Err(RequestError::MalformedBody(
                "expected a JSON object".to_string(),
            ));
        };

        let mut fields = AttributeMap::new();
        for name in CREATE_FIELDS {
            let value = object
                .remove(name)
                .ok_or(RequestError::MissingField(name))?;
            fields.insert(name.to_string(), AttributeValue::from(value));
        }

        Ok(Self { fields })
    }

    /// Turns the payload into a brand new item stamped with `now`.
    pub fn into_item(self, now: DateTime<Utc>) -> Item {
        Item::new(self.fields, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOYOTA: &str =
        r#"{"make": "Toyota", "model": "Corolla", "category": "sedan", "year": 2020}"#;

    #[test]
    fn test_parse_valid_payload() {
        let request = CreateItemRequest::from_json(TOYOTA).unwrap();

        assert_eq!(request.fields.len(), 4);
        assert_eq!(
            request.fields.get("make"),
            Some(&AttributeValue::string("Toyota"))
        );
        assert_eq!(
            request.fields.get("year"),
            Some(&AttributeValue::number(2020))
        );
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = r#"{"make": "Ford", "model": "F-150", "category": "truck", "year": 2019, "color": "blue"}"#;
        let request = CreateItemRequest::from_json(body).unwrap();
        assert!(!request.fields.contains_key("color"));
    }

    #[test]
    fn test_null_field_counts_as_present() {
        let body = r#"{"make": null, "model": "Civic", "category": "sedan", "year": 2018}"#;
        let request = CreateItemRequest::from_json(body).unwrap();
        assert_eq!(request.fields.get("make"), Some(&AttributeValue::Null));
    }

    #[test]
    fn test_missing_field() {
        let body = r#"{"make": "Toyota", "model": "Corolla", "year": 2020}"#;
        let result = CreateItemRequest::from_json(body);
        assert_eq!(result, Err(RequestError::MissingField("category")));
    }

    #[test]
    fn test_invalid_json() {
        let result = CreateItemRequest::from_json("{not json");
        assert!(matches!(result, Err(RequestError::MalformedBody(_))));
    }

    #[test]
    fn test_non_object_body() {
        let result = CreateItemRequest::from_json("[1, 2, 3]");
        assert_eq!(
            result,
            Err(RequestError::MalformedBody(
                "expected a JSON object".to_string()
            ))
        );
    }

    #[test]
    fn test_into_item() {
        let item = CreateItemRequest::from_json(TOYOTA)
            .unwrap()
            .into_item(Utc::now());

        assert_eq!(item.object_id.len(), 36);
        assert_eq!(item.created_at, item.updated_at);
        assert_eq!(item.attributes.len(), 4);
    }
}
