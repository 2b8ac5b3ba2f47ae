use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use objects_core::storage::{ObjectStore, ObjectStoreError};

/// Object store keeping uploaded contents in memory, keyed by `(bucket, key)`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryObjectStore {
    objects: Arc<RwLock<BTreeMap<(String, String), Vec<u8>>>>,
    fail_uploads: bool,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store rejecting every upload.
    pub fn failing() -> Self {
        Self {
            fail_uploads: true,
            ..Self::default()
        }
    }

    pub async fn get(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        let objects = self.objects.read().await;
        objects.get(&(bucket.to_string(), key.to_string())).cloned()
    }

    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn upload_file(&self, bucket: &str, key: &str, path: &Path) -> Result<(), ObjectStoreError> {
        if self.fail_uploads {
            return Err(ObjectStoreError::UploadFailed {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: "upload rejected".to_string(),
            });
        }

        let contents = tokio::fs::read(path)
            .await
            .map_err(|e| ObjectStoreError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let mut objects = self.objects.write().await;
        objects.insert((bucket.to_string(), key.to_string()), contents);
        Ok(())
    }
}
