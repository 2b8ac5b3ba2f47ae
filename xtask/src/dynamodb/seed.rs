//! Sample vehicles for a freshly deployed table.

use std::collections::HashMap;
use std::time::Duration;

use aws_sdk_dynamodb::types::{PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;
use chrono::Utc;
use objects_core::dynamodb::item_to_dynamo;
use objects_core::item::{AttributeMap, AttributeValue, Item};

use super::error::{sdk_error, DynamodbError, Result};

/// `BatchWriteItem` accepts at most this many requests.
const BATCH_SIZE: usize = 25;
const MAX_ATTEMPTS: u32 = 5;

/// Make, model and category the generated items cycle through.
const VEHICLES: [(&str, &str, &str); 8] = [
    ("Toyota", "Corolla", "sedan"),
    ("Honda", "Civic", "sedan"),
    ("Ford", "F-150", "truck"),
    ("Tesla", "Model Y", "suv"),
    ("Subaru", "Outback", "wagon"),
    ("Mazda", "MX-5", "convertible"),
    ("Kia", "Sportage", "suv"),
    ("Volkswagen", "Golf", "hatchback"),
];

/// Generates `count` vehicles shaped like the create handler's output.
pub fn generate_seed_items(count: usize) -> Vec<Item> {
    let now = Utc::now();

    (0..count)
        .map(|i| {
            let (make, model, category) = VEHICLES[i % VEHICLES.len()];
            let attributes = AttributeMap::from([
                ("make".to_string(), AttributeValue::string(make)),
                ("model".to_string(), AttributeValue::string(model)),
                ("category".to_string(), AttributeValue::string(category)),
                ("year".to_string(), AttributeValue::number(2015 + i % 10)),
            ]);
            Item::new(attributes, now)
        })
        .collect()
}

/// `2015 Toyota Corolla (sedan)`
pub fn describe_item(item: &Item) -> String {
    let field = |name: &str| match item.attributes.get(name) {
        Some(AttributeValue::String(s) | AttributeValue::Number(s)) => s.clone(),
        _ => "?".to_string(),
    };

    format!(
        "{} {} {} ({})",
        field("year"),
        field("make"),
        field("model"),
        field("category")
    )
}

/// Writes the items in batches, resending whatever DynamoDB leaves unprocessed.
///
/// Returns the number of items written.
pub async fn seed_items(client: &Client, table_name: &str, items: &[Item]) -> Result<usize> {
    let mut written = 0;

    for chunk in items.chunks(BATCH_SIZE) {
        let mut pending = chunk
            .iter()
            .map(put_request)
            .collect::<Result<Vec<_>>>()?;

        for attempt in 1..=MAX_ATTEMPTS {
            let sent = pending.len();
            let output = client
                .batch_write_item()
                .request_items(table_name, pending)
                .send()
                .await
                .map_err(sdk_error)?;

            pending = unprocessed_for(output.unprocessed_items, table_name);
            written += sent - pending.len();

            if pending.is_empty() {
                break;
            }
            if attempt == MAX_ATTEMPTS {
                return Err(DynamodbError::Unprocessed {
                    written,
                    remaining: items.len() - written,
                });
            }
            tokio::time::sleep(backoff(attempt)).await;
        }
    }

    Ok(written)
}

fn put_request(item: &Item) -> Result<WriteRequest> {
    let put = PutRequest::builder()
        .set_item(Some(item_to_dynamo(item)))
        .build()
        .map_err(sdk_error)?;
    Ok(WriteRequest::builder().put_request(put).build())
}

/// Requests DynamoDB handed back for `table_name`.
fn unprocessed_for(
    unprocessed: Option<HashMap<String, Vec<WriteRequest>>>,
    table_name: &str,
) -> Vec<WriteRequest> {
    unprocessed
        .and_then(|mut tables| tables.remove(table_name))
        .unwrap_or_default()
}

/// Exponential delay before resending, starting at 100ms.
fn backoff(attempt: u32) -> Duration {
    Duration::from_millis(100 << attempt.saturating_sub(1).min(6))
}
