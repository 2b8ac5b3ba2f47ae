//! DynamoDB repository implementation.
//!
//! Implements `ItemRepository` from `objects_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use objects_core::dynamodb::{
    build_update_expression, dynamo_to_item, from_dynamo_map, item_to_dynamo, key_of,
    object_id_of,
};
use objects_core::item::{AttributeMap, Item};
use objects_core::storage::{ItemRepository, Result, ScanPage};

use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};

/// DynamoDB-based item repository.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl ItemRepository for DynamoDbRepository {
    async fn get_item(&self, object_id: &str) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_of(object_id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(raw) => Ok(Some(dynamo_to_item(&raw)?)),
            None => Ok(None),
        }
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_dynamo(item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_item(&self, object_id: &str, changes: &AttributeMap) -> Result<AttributeMap> {
        let update = build_update_expression(changes);

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(key_of(object_id)))
            .update_expression(update.expression)
            .set_expression_attribute_names(Some(update.names))
            .set_expression_attribute_values(Some(update.values))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(map_update_item_error)?;

        match result.attributes {
            Some(raw) => from_dynamo_map(&raw),
            None => Ok(AttributeMap::new()),
        }
    }

    async fn delete_item(&self, object_id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_of(object_id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan(&self, exclusive_start_key: Option<&str>) -> Result<ScanPage> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_exclusive_start_key(exclusive_start_key.map(key_of))
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result
            .items
            .unwrap_or_default()
            .iter()
            .map(dynamo_to_item)
            .collect::<Result<Vec<_>>>()?;

        let last_evaluated_key = match result.last_evaluated_key {
            Some(key) if !key.is_empty() => Some(object_id_of(&key)?),
            _ => None,
        };

        Ok(ScanPage {
            items,
            last_evaluated_key,
        })
    }
}
