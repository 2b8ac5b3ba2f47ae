//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB attribute maps and items,
//! shared by the DynamoDB repository and the seeding tool. These are
//! testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue as DynamoValue;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::item::{AttributeMap, AttributeValue, Item, OBJECT_ID};
use crate::storage::RepositoryError;

/// Raw attribute map as the SDK represents it.
pub type DynamoItem = HashMap<String, DynamoValue>;

/// Convert a core attribute value to its DynamoDB representation.
pub fn to_dynamo(value: &AttributeValue) -> DynamoValue {
    match value {
        AttributeValue::String(s) => DynamoValue::S(s.clone()),
        AttributeValue::Number(n) => DynamoValue::N(n.clone()),
        AttributeValue::Bool(b) => DynamoValue::Bool(*b),
        AttributeValue::Null => DynamoValue::Null(true),
        AttributeValue::List(values) => DynamoValue::L(values.iter().map(to_dynamo).collect()),
        AttributeValue::Map(map) => DynamoValue::M(to_dynamo_map(map)),
    }
}

/// Convert a DynamoDB attribute value to the core representation.
///
/// String and number sets become lists. Binary values become base64 strings.
pub fn from_dynamo(value: &DynamoValue) -> Result<AttributeValue, RepositoryError> {
    let converted = match value {
        DynamoValue::S(s) => AttributeValue::String(s.clone()),
        DynamoValue::N(n) => AttributeValue::Number(n.clone()),
        DynamoValue::Bool(b) => AttributeValue::Bool(*b),
        DynamoValue::Null(_) => AttributeValue::Null,
        DynamoValue::L(values) => AttributeValue::List(
            values
                .iter()
                .map(from_dynamo)
                .collect::<Result<_, _>>()?,
        ),
        DynamoValue::M(map) => AttributeValue::Map(from_dynamo_map(map)?),
        DynamoValue::Ss(values) => {
            AttributeValue::List(values.iter().cloned().map(AttributeValue::String).collect())
        }
        DynamoValue::Ns(values) => {
            AttributeValue::List(values.iter().cloned().map(AttributeValue::Number).collect())
        }
        DynamoValue::B(blob) => AttributeValue::String(STANDARD.encode(blob.as_ref())),
        DynamoValue::Bs(blobs) => AttributeValue::List(
            blobs
                .iter()
                .map(|blob| AttributeValue::String(STANDARD.encode(blob.as_ref())))
                .collect(),
        ),
        other => {
            return Err(RepositoryError::InvalidData(format!(
                "Unsupported attribute value: {:?}",
                other
            )))
        }
    };
    Ok(converted)
}

/// Convert a core attribute map to a DynamoDB attribute map.
pub fn to_dynamo_map(map: &AttributeMap) -> DynamoItem {
    map.iter()
        .map(|(name, value)| (name.clone(), to_dynamo(value)))
        .collect()
}

/// Convert a DynamoDB attribute map to a core attribute map.
pub fn from_dynamo_map(map: &DynamoItem) -> Result<AttributeMap, RepositoryError> {
    map.iter()
        .map(|(name, value)| Ok::<_, RepositoryError>((name.clone(), from_dynamo(value)?)))
        .collect()
}

/// Convert an item to a DynamoDB item.
pub fn item_to_dynamo(item: &Item) -> DynamoItem {
    to_dynamo_map(&item.to_attributes())
}

/// Convert a DynamoDB item to an item.
pub fn dynamo_to_item(raw: &DynamoItem) -> Result<Item, RepositoryError> {
    Ok(Item::from_attributes(from_dynamo_map(raw)?)?)
}

/// Primary key of the item with the given identifier.
pub fn key_of(object_id: &str) -> DynamoItem {
    HashMap::from([(OBJECT_ID.to_string(), DynamoValue::S(object_id.to_string()))])
}

/// Reads the identifier out of a `LastEvaluatedKey`.
pub fn object_id_of(key: &DynamoItem) -> Result<String, RepositoryError> {
    match key.get(OBJECT_ID) {
        Some(DynamoValue::S(id)) => Ok(id.clone()),
        _ => Err(RepositoryError::InvalidData(format!(
            "Scan key has no string {}",
            OBJECT_ID
        ))),
    }
}

/// An `UpdateItem` request assembled from a set of changes.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: DynamoItem,
}

/// Builds a `SET` expression with one `#aN = :vN` clause per change.
///
/// Every attribute name goes through a placeholder so reserved words such
/// as `year` are accepted.
pub fn build_update_expression(changes: &AttributeMap) -> UpdateExpression {
    let mut clauses = Vec::with_capacity(changes.len());
    let mut names = HashMap::new();
    let mut values = HashMap::new();

    for (index, (name, value)) in changes.iter().enumerate() {
        let name_placeholder = format!("#a{index}");
        let value_placeholder = format!(":v{index}");
        clauses.push(format!("{name_placeholder} = {value_placeholder}"));
        names.insert(name_placeholder, name.clone());
        values.insert(value_placeholder, to_dynamo(value));
    }

    UpdateExpression {
        expression: format!("SET {}", clauses.join(", ")),
        names,
        values,
    }
}
