//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `ItemRepository`
//! using `aws-sdk-dynamodb`. The table has a single string partition key,
//! `object_id`, and no sort key or secondary indexes.

mod error;
mod repository;

pub use repository::DynamoDbRepository;
