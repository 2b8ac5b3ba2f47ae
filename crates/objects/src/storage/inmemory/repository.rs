//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use objects_core::item::{AttributeMap, Item};
use objects_core::storage::{ItemRepository, Result, ScanPage};

const DEFAULT_PAGE_SIZE: usize = 100;

/// In-memory item table.
///
/// Items are kept ordered by identifier so scans resume deterministically.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    items: Arc<RwLock<BTreeMap<String, Item>>>,
    page_size: usize,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty repository with the default scan page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Creates a new empty repository returning at most `page_size` items per scan.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            items: Arc::new(RwLock::new(BTreeMap::new())),
            page_size: page_size.max(1),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn get_item(&self, object_id: &str) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(object_id).cloned())
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        items.insert(item.object_id.clone(), item.clone());
        Ok(())
    }

    async fn update_item(&self, object_id: &str, changes: &AttributeMap) -> Result<AttributeMap> {
        let mut items = self.items.write().await;
        let mut item = items
            .get(object_id)
            .cloned()
            .unwrap_or_else(|| Item::sparse(object_id));

        item.apply(changes)?;
        items.insert(object_id.to_string(), item);

        Ok(changes.clone())
    }

    async fn delete_item(&self, object_id: &str) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(object_id);
        Ok(())
    }

    async fn scan(&self, exclusive_start_key: Option<&str>) -> Result<ScanPage> {
        let items = self.items.read().await;

        let lower = match exclusive_start_key {
            Some(key) => Bound::Excluded(key),
            None => Bound::Unbounded,
        };
        let mut remaining = items.range::<str, _>((lower, Bound::Unbounded));

        let page: Vec<Item> = remaining
            .by_ref()
            .take(self.page_size)
            .map(|(_, item)| item.clone())
            .collect();

        let last_evaluated_key = if remaining.next().is_some() {
            page.last().map(|item| item.object_id.clone())
        } else {
            None
        };

        Ok(ScanPage {
            items: page,
            last_evaluated_key,
        })
    }
}
