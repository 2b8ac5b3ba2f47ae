//! Application state with repository-based storage.
//!
//! This module defines the shared state passed to every handler. Storage is
//! held as a repository trait object so the same handlers run against the
//! in-memory table or DynamoDB, selected via feature flags.

use std::sync::Arc;

use objects_core::storage::ItemRepository;

use crate::config::StorageConfig;

/// Shared application state.
///
/// Cloned for each request; the repository is constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ItemRepository>,
}

impl AppState {
    /// Creates an AppState around an existing repository.
    pub fn with_repository(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }
}

#[cfg(any(test, feature = "inmemory"))]
impl Default for AppState {
    /// An empty in-memory table.
    fn default() -> Self {
        Self::with_repository(Arc::new(crate::storage::inmemory::InMemoryRepository::new()))
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with an in-memory table.
        pub async fn new(config: &StorageConfig) -> Result<Self, anyhow::Error> {
            tracing::info!(
                table_name = %config.table_name,
                scan_page_size = config.scan_page_size,
                "Using in-memory storage"
            );
            let repository = InMemoryRepository::with_page_size(config.scan_page_size);
            Ok(Self::with_repository(Arc::new(repository)))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        ///
        /// Credentials and region come from the default AWS provider chain.
        pub async fn new(config: &StorageConfig) -> Result<Self, anyhow::Error> {
            let sdk_config = crate::aws::load_config().await;
            let client = aws_sdk_dynamodb::Client::new(&sdk_config);
            tracing::info!(table_name = %config.table_name, "Using DynamoDB storage");
            let repository = DynamoDbRepository::new(client, config.table_name.clone());
            Ok(Self::with_repository(Arc::new(repository)))
        }
    }
}
