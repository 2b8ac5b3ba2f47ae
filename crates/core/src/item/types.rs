use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use super::error::ItemError;
use super::value::{AttributeMap, AttributeValue};

/// Name of the identifier attribute, the table's partition key.
pub const OBJECT_ID: &str = "object_id";
/// Name of the creation timestamp attribute.
pub const CREATED_AT: &str = "created_at";
/// Name of the last-modification timestamp attribute.
pub const UPDATED_AT: &str = "updated_at";

/// Formats a timestamp the way items store it: RFC 3339, UTC, microseconds,
/// `+00:00` offset.
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// One record in the table.
///
/// Server-managed fields live outside of `attributes`, which holds
/// caller-defined data. A stored timestamp that is not a string (written by
/// some other tool) is kept in `attributes` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub object_id: String,
    /// Missing on sparse items created by an update of an unknown identifier.
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub attributes: AttributeMap,
}

impl Item {
    /// Creates a new item with a fresh identifier.
    ///
    /// `created_at` and `updated_at` are both set to `now`.
    pub fn new(attributes: AttributeMap, now: DateTime<Utc>) -> Self {
        let stamp = timestamp(now);
        Self {
            object_id: Uuid::new_v4().to_string(),
            created_at: Some(stamp.clone()),
            updated_at: Some(stamp),
            attributes: strip_reserved(attributes),
        }
    }

    /// Creates an item holding nothing but its identifier.
    pub fn sparse(object_id: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            created_at: None,
            updated_at: None,
            attributes: AttributeMap::new(),
        }
    }

    /// Sets a specific identifier (useful for testing).
    pub fn with_object_id(mut self, object_id: impl Into<String>) -> Self {
        self.object_id = object_id.into();
        self
    }

    /// Rebuilds an item from a flat attribute map as stored in the table.
    pub fn from_attributes(mut attributes: AttributeMap) -> Result<Self, ItemError> {
        let object_id = match attributes.remove(OBJECT_ID) {
            Some(AttributeValue::String(id)) => id,
            Some(_) => return Err(ItemError::InvalidReserved(OBJECT_ID)),
            None => return Err(ItemError::MissingObjectId),
        };
        let created_at = take_timestamp(&mut attributes, CREATED_AT);
        let updated_at = take_timestamp(&mut attributes, UPDATED_AT);

        Ok(Self {
            object_id,
            created_at,
            updated_at,
            attributes,
        })
    }

    /// Flattens the item into the attribute map stored in the table.
    pub fn to_attributes(&self) -> AttributeMap {
        let mut map = self.attributes.clone();
        map.insert(
            OBJECT_ID.to_string(),
            AttributeValue::String(self.object_id.clone()),
        );
        if let Some(created_at) = &self.created_at {
            map.insert(
                CREATED_AT.to_string(),
                AttributeValue::String(created_at.clone()),
            );
        }
        if let Some(updated_at) = &self.updated_at {
            map.insert(
                UPDATED_AT.to_string(),
                AttributeValue::String(updated_at.clone()),
            );
        }
        map
    }

    /// Returns an attribute by name, reserved fields included.
    pub fn get(&self, name: &str) -> Option<AttributeValue> {
        match name {
            OBJECT_ID => Some(AttributeValue::String(self.object_id.clone())),
            CREATED_AT if self.created_at.is_some() => {
                self.created_at.clone().map(AttributeValue::String)
            }
            UPDATED_AT if self.updated_at.is_some() => {
                self.updated_at.clone().map(AttributeValue::String)
            }
            _ => self.attributes.get(name).cloned(),
        }
    }

    /// Applies a partial update, routing timestamps to their reserved fields.
    ///
    /// The identifier is the table key and cannot be changed.
    pub fn apply(&mut self, changes: &AttributeMap) -> Result<(), ItemError> {
        if changes.contains_key(OBJECT_ID) {
            return Err(ItemError::ImmutableKey);
        }
        for (name, value) in changes {
            match (name.as_str(), value) {
                (CREATED_AT, AttributeValue::String(stamp)) => {
                    self.attributes.remove(CREATED_AT);
                    self.created_at = Some(stamp.clone());
                }
                (UPDATED_AT, AttributeValue::String(stamp)) => {
                    self.attributes.remove(UPDATED_AT);
                    self.updated_at = Some(stamp.clone());
                }
                (CREATED_AT, _) => {
                    self.created_at = None;
                    self.attributes.insert(name.clone(), value.clone());
                }
                (UPDATED_AT, _) => {
                    self.updated_at = None;
                    self.attributes.insert(name.clone(), value.clone());
                }
                _ => {
                    self.attributes.insert(name.clone(), value.clone());
                }
            }
        }
        Ok(())
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_attributes().serialize(serializer)
    }
}

fn strip_reserved(mut attributes: AttributeMap) -> AttributeMap {
    for name in [OBJECT_ID, CREATED_AT, UPDATED_AT] {
        attributes.remove(name);
    }
    attributes
}

/// Moves a string timestamp out of `attributes`; anything else stays put.
fn take_timestamp(attributes: &mut AttributeMap, name: &str) -> Option<String> {
    match attributes.remove(name) {
        Some(AttributeValue::String(stamp)) => Some(stamp),
        Some(other) => {
            attributes.insert(name.to_string(), other);
            None
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_attributes() -> AttributeMap {
        AttributeMap::from([
            ("make".to_string(), AttributeValue::string("Toyota")),
            ("model".to_string(), AttributeValue::string("Corolla")),
            ("year".to_string(), AttributeValue::number(2020)),
        ])
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(timestamp(fixed_now()), "2024-03-01T12:30:00.000000+00:00");
    }

    #[test]
    fn test_new_item_sets_identifier_and_timestamps() {
        let item = Item::new(sample_attributes(), fixed_now());

        assert_eq!(item.object_id.len(), 36);
        assert!(Uuid::parse_str(&item.object_id).is_ok());
        assert_eq!(item.created_at, item.updated_at);
        assert_eq!(
            item.created_at.as_deref(),
            Some("2024-03-01T12:30:00.000000+00:00")
        );
    }

    #[test]
    fn test_new_items_get_distinct_identifiers() {
        let a = Item::new(sample_attributes(), fixed_now());
        let b = Item::new(sample_attributes(), fixed_now());
        assert_ne!(a.object_id, b.object_id);
    }

    #[test]
    fn test_new_item_drops_reserved_user_fields() {
        let mut attributes = sample_attributes();
        attributes.insert(OBJECT_ID.to_string(), AttributeValue::string("spoofed"));
        attributes.insert(CREATED_AT.to_string(), AttributeValue::string("yesterday"));

        let item = Item::new(attributes, fixed_now());

        assert_ne!(item.object_id, "spoofed");
        assert!(!item.attributes.contains_key(OBJECT_ID));
        assert!(!item.attributes.contains_key(CREATED_AT));
    }

    #[test]
    fn test_attribute_round_trip() {
        let item = Item::new(sample_attributes(), fixed_now());
        let restored = Item::from_attributes(item.to_attributes()).unwrap();
        assert_eq!(restored, item);
    }

    #[test]
    fn test_from_attributes_requires_object_id() {
        let result = Item::from_attributes(sample_attributes());
        assert_eq!(result, Err(ItemError::MissingObjectId));
    }

    #[test]
    fn test_from_attributes_rejects_numeric_object_id() {
        let mut attributes = sample_attributes();
        attributes.insert(OBJECT_ID.to_string(), AttributeValue::number(7));
        let result = Item::from_attributes(attributes);
        assert_eq!(result, Err(ItemError::InvalidReserved(OBJECT_ID)));
    }

    #[test]
    fn test_from_attributes_allows_missing_timestamps() {
        let attributes = AttributeMap::from([(
            OBJECT_ID.to_string(),
            AttributeValue::string("abc"),
        )]);
        let item = Item::from_attributes(attributes).unwrap();
        assert_eq!(item, Item::sparse("abc"));
    }

    #[test]
    fn test_from_attributes_keeps_numeric_timestamp() {
        let attributes = AttributeMap::from([
            (OBJECT_ID.to_string(), AttributeValue::string("legacy-1")),
            (CREATED_AT.to_string(), AttributeValue::number(1700000000)),
            ("make".to_string(), AttributeValue::string("Toyota")),
        ]);

        let item = Item::from_attributes(attributes.clone()).unwrap();

        assert_eq!(item.object_id, "legacy-1");
        assert!(item.created_at.is_none());
        assert_eq!(item.get(CREATED_AT), Some(AttributeValue::number(1700000000)));
        assert_eq!(item.to_attributes(), attributes);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json[CREATED_AT].as_f64(), Some(1700000000.0));
    }

    #[test]
    fn test_apply_replaces_numeric_timestamp() {
        let attributes = AttributeMap::from([
            (OBJECT_ID.to_string(), AttributeValue::string("legacy-1")),
            (UPDATED_AT.to_string(), AttributeValue::number(1700000000)),
        ]);
        let mut item = Item::from_attributes(attributes).unwrap();

        let changes =
            AttributeMap::from([(UPDATED_AT.to_string(), AttributeValue::string("later"))]);
        item.apply(&changes).unwrap();

        assert_eq!(item.updated_at.as_deref(), Some("later"));
        assert!(!item.attributes.contains_key(UPDATED_AT));
        assert_eq!(
            item.to_attributes().get(UPDATED_AT),
            Some(&AttributeValue::string("later"))
        );
    }

    #[test]
    fn test_apply_routes_timestamps() {
        let mut item = Item::new(sample_attributes(), fixed_now());
        let changes = AttributeMap::from([
            (UPDATED_AT.to_string(), AttributeValue::string("later")),
            ("color".to_string(), AttributeValue::string("red")),
        ]);

        item.apply(&changes).unwrap();

        assert_eq!(item.updated_at.as_deref(), Some("later"));
        assert_eq!(item.attributes.get("color"), Some(&AttributeValue::string("red")));
        assert!(!item.attributes.contains_key(UPDATED_AT));
    }

    #[test]
    fn test_apply_rejects_key_change() {
        let mut item = Item::new(sample_attributes(), fixed_now());
        let changes = AttributeMap::from([(OBJECT_ID.to_string(), AttributeValue::string("x"))]);
        assert_eq!(item.apply(&changes), Err(ItemError::ImmutableKey));
    }

    #[test]
    fn test_get_reads_reserved_and_user_fields() {
        let item = Item::new(sample_attributes(), fixed_now()).with_object_id("id-1");
        assert_eq!(item.get(OBJECT_ID), Some(AttributeValue::string("id-1")));
        assert_eq!(item.get("make"), Some(AttributeValue::string("Toyota")));
        assert_eq!(item.get("missing"), None);
    }

    #[test]
    fn test_serialize_flattens_and_normalizes() {
        let item = Item::new(sample_attributes(), fixed_now()).with_object_id("id-1");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["object_id"], "id-1");
        assert_eq!(json["make"], "Toyota");
        assert_eq!(json["year"].as_f64(), Some(2020.0));
        assert!(json["year"].is_f64());
        assert_eq!(json["created_at"], json["updated_at"]);
    }
}
