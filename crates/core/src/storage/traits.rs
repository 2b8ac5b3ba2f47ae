use std::path::Path;

use async_trait::async_trait;

use crate::item::{AttributeMap, Item};

use super::{ObjectStoreError, Result, ScanPage};

/// Repository for the single item table, keyed by `object_id`.
///
/// Every method is one atomic backend call.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets an item by its identifier.
    async fn get_item(&self, object_id: &str) -> Result<Option<Item>>;

    /// Writes an item, overwriting any item with the same identifier.
    async fn put_item(&self, item: &Item) -> Result<()>;

    /// Sets the given attributes on an item without any condition.
    ///
    /// Returns the updated attributes with their new values. An unknown
    /// identifier yields a new item holding only the identifier and `changes`.
    async fn update_item(&self, object_id: &str, changes: &AttributeMap) -> Result<AttributeMap>;

    /// Deletes an item. Deleting an unknown identifier is not an error.
    async fn delete_item(&self, object_id: &str) -> Result<()>;

    /// Reads one page of the table, starting after `exclusive_start_key`.
    async fn scan(&self, exclusive_start_key: Option<&str>) -> Result<ScanPage>;
}

/// Destination for exported files.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Uploads a local file to `bucket` under `key`.
    async fn upload_file(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
    ) -> std::result::Result<(), ObjectStoreError>;
}
