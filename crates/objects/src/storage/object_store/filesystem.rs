use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use objects_core::storage::{ObjectStore, ObjectStoreError};

/// Object store backed by a local directory.
///
/// An upload of `key` into `bucket` lands at `<root>/<bucket>/<key>`, with
/// intermediate directories created as needed.
#[derive(Debug, Clone)]
pub struct FilesystemObjectStore {
    root: PathBuf,
}

impl FilesystemObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Location an object is written to.
    pub fn object_path(&self, bucket: &str, key: &str) -> PathBuf {
        self.root.join(bucket).join(key)
    }
}

fn io_error(path: &Path, err: std::io::Error) -> ObjectStoreError {
    ObjectStoreError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[async_trait]
impl ObjectStore for FilesystemObjectStore {
    async fn upload_file(&self, bucket: &str, key: &str, path: &Path) -> Result<(), ObjectStoreError> {
        let destination = self.object_path(bucket, key);

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }

        fs::copy(path, &destination)
            .await
            .map_err(|e| io_error(path, e))?;

        tracing::debug!(destination = %destination.display(), "Stored object on filesystem");
        Ok(())
    }
}
