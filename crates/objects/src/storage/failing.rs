//! Repository whose every call fails, for exercising fault paths.

use async_trait::async_trait;

use objects_core::item::{AttributeMap, Item};
use objects_core::storage::{ItemRepository, RepositoryError, Result, ScanPage};

pub const FAILURE_MESSAGE: &str = "Throughput exceeded, please retry";

#[derive(Debug, Clone, Default)]
pub struct FailingRepository;

fn fault<T>() -> Result<T> {
    Err(RepositoryError::QueryFailed(FAILURE_MESSAGE.to_string()))
}

#[async_trait]
impl ItemRepository for FailingRepository {
    async fn get_item(&self, _object_id: &str) -> Result<Option<Item>> {
        fault()
    }

    async fn put_item(&self, _item: &Item) -> Result<()> {
        fault()
    }

    async fn update_item(&self, _object_id: &str, _changes: &AttributeMap) -> Result<AttributeMap> {
        fault()
    }

    async fn delete_item(&self, _object_id: &str) -> Result<()> {
        fault()
    }

    async fn scan(&self, _exclusive_start_key: Option<&str>) -> Result<ScanPage> {
        fault()
    }
}
