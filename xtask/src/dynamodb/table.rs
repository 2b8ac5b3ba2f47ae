//! Item table provisioning against DynamoDB (Imperative Shell).

use std::time::Duration;

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
    TableStatus as SdkTableStatus,
};
use aws_sdk_dynamodb::Client;
use objects_core::item::OBJECT_ID;

use super::error::{sdk_error, DynamodbError, Result};
use super::planning::{TableState, TableStatus};

const ACTIVATION_POLLS: u32 = 60;
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Connects through the default AWS configuration chain.
///
/// Returns the client and a description of where it points. The region
/// falls back to `us-east-1`; `AWS_ENDPOINT_URL` selects a local DynamoDB.
pub async fn connect() -> (Client, String) {
    let region = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await;

    let target = match std::env::var("AWS_ENDPOINT_URL") {
        Ok(url) => format!("local DynamoDB ({url})"),
        Err(_) => format!(
            "AWS DynamoDB (region: {})",
            config
                .region()
                .map(|region| region.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        ),
    };

    (Client::new(&config), target)
}

/// Describes the table, or `None` when it does not exist.
pub async fn describe(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    let response = match client.describe_table().table_name(table_name).send().await {
        Ok(response) => response,
        Err(err)
            if err
                .as_service_error()
                .is_some_and(|e| e.is_resource_not_found_exception()) =>
        {
            return Ok(None)
        }
        Err(err) => return Err(sdk_error(err)),
    };

    let Some(table) = response.table() else {
        return Ok(None);
    };

    let partition_key = table
        .key_schema()
        .iter()
        .find(|key| key.key_type() == &KeyType::Hash)
        .map(|key| key.attribute_name().to_string());
    let status = match table.table_status() {
        Some(SdkTableStatus::Active) => TableStatus::Active,
        _ => TableStatus::Transitioning,
    };

    Ok(Some(TableState {
        status,
        partition_key,
    }))
}

/// Creates the on-demand table keyed by `object_id` and waits until it is active.
pub async fn create(client: &Client, table_name: &str) -> Result<()> {
    let key = KeySchemaElement::builder()
        .attribute_name(OBJECT_ID)
        .key_type(KeyType::Hash)
        .build()
        .map_err(sdk_error)?;
    let attribute = AttributeDefinition::builder()
        .attribute_name(OBJECT_ID)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(sdk_error)?;

    client
        .create_table()
        .table_name(table_name)
        .key_schema(key)
        .attribute_definitions(attribute)
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .map_err(sdk_error)?;

    for _ in 0..ACTIVATION_POLLS {
        let state = describe(client, table_name).await?;
        if state.is_some_and(|state| state.status == TableStatus::Active) {
            return Ok(());
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }

    Err(DynamodbError::ActivationTimeout {
        table_name: table_name.to_string(),
    })
}

pub async fn delete(client: &Client, table_name: &str) -> Result<()> {
    client
        .delete_table()
        .table_name(table_name)
        .send()
        .await
        .map_err(sdk_error)?;
    Ok(())
}
