use std::collections::BTreeMap;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Attribute name to value mapping, ordered by attribute name.
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// A storage-native attribute value.
///
/// Numbers keep their exact decimal text, the way the key-value store holds
/// them. They only become floating point when serialized to JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    String(String),
    /// Arbitrary-precision decimal, stored as its decimal text.
    Number(String),
    Bool(bool),
    Null,
    List(Vec<AttributeValue>),
    Map(AttributeMap),
}

impl AttributeValue {
    /// Creates a string attribute.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Creates a number attribute from anything that renders as a decimal.
    pub fn number(value: impl ToString) -> Self {
        Self::Number(value.to_string())
    }

    /// Returns the string content, if this is a string attribute.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number as a float, if this is a number attribute.
    ///
    /// The conversion is lossy for decimals that do not fit an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.parse().ok(),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.to_string()),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(values) => {
                Self::List(values.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Number(value.to_string())
    }
}

/// Numbers serialize as JSON floats (`2020` becomes `2020.0`).
///
/// Decimal text that cannot be parsed as a float is emitted verbatim as a
/// string rather than dropped.
impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Number(n) => match n.parse::<f64>() {
                Ok(f) => serializer.serialize_f64(f),
                Err(_) => serializer.serialize_str(n),
            },
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Null => serializer.serialize_unit(),
            Self::List(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_decimal_text() {
        let value = AttributeValue::from(json!(2020));
        assert_eq!(value, AttributeValue::Number("2020".to_string()));

        let value = AttributeValue::from(json!(1.25));
        assert_eq!(value, AttributeValue::Number("1.25".to_string()));
    }

    #[test]
    fn test_from_json_nested() {
        let value = AttributeValue::from(json!({"tags": ["a", true, null]}));
        let AttributeValue::Map(map) = value else {
            panic!("expected a map");
        };
        assert_eq!(
            map.get("tags"),
            Some(&AttributeValue::List(vec![
                AttributeValue::string("a"),
                AttributeValue::Bool(true),
                AttributeValue::Null,
            ]))
        );
    }

    #[test]
    fn test_number_serializes_as_float() {
        let json = serde_json::to_string(&AttributeValue::number(2020)).unwrap();
        assert_eq!(json, "2020.0");

        let json = serde_json::to_string(&AttributeValue::number("19.99")).unwrap();
        assert_eq!(json, "19.99");
    }

    #[test]
    fn test_unparseable_number_serializes_as_string() {
        let json = serde_json::to_string(&AttributeValue::Number("n/a".to_string())).unwrap();
        assert_eq!(json, "\"n/a\"");
    }

    #[test]
    fn test_nested_numbers_are_normalized() {
        let mut inner = AttributeMap::new();
        inner.insert("doors".to_string(), AttributeValue::number(4));
        let value = AttributeValue::List(vec![AttributeValue::Map(inner)]);

        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, json!([{"doors": 4.0}]));
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(AttributeValue::number(2020).as_f64(), Some(2020.0));
        assert_eq!(AttributeValue::string("2020").as_f64(), None);
    }
}
