//! Scheduled summary export (Imperative Shell).
//!
//! Scans the whole table, renders it as CSV into a staging file and uploads
//! that file to the object store. Failures are logged and swallowed: the
//! scheduler triggering the export never sees an error.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use objects_core::export::{header_row, item_row, summary_key};
use objects_core::item::Item;
use objects_core::storage::{ItemRepository, ObjectStore, ObjectStoreError, RepositoryError};

use crate::config::ExportConfig;

/// Errors that abort an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to scan table: {0}")]
    Scan(#[from] RepositoryError),
    #[error("Failed to render CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to write staging file {path}: {source}")]
    Staging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to upload summary: {0}")]
    Upload(#[from] ObjectStoreError),
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Object key the summary was uploaded under.
    pub key: String,
    /// Number of data rows, header excluded.
    pub rows: usize,
}

/// The export with its collaborators.
pub struct ExportJob {
    repository: Arc<dyn ItemRepository>,
    object_store: Arc<dyn ObjectStore>,
    config: ExportConfig,
}

impl ExportJob {
    pub fn new(
        repository: Arc<dyn ItemRepository>,
        object_store: Arc<dyn ObjectStore>,
        config: ExportConfig,
    ) -> Self {
        Self {
            repository,
            object_store,
            config,
        }
    }

    /// Runs the export for the current UTC date, logging the outcome.
    pub async fn run(&self) {
        let today = Utc::now().date_naive();
        match self.try_run(today).await {
            Ok(outcome) => tracing::info!(
                bucket = %self.config.bucket_name,
                key = %outcome.key,
                rows = outcome.rows,
                "Exported summary"
            ),
            Err(e) => tracing::error!(
                bucket = %self.config.bucket_name,
                error = %e,
                "Summary export failed"
            ),
        }
    }

    /// Runs the export for `date`, reporting the first failure.
    ///
    /// Nothing is uploaded unless the whole table was scanned and written.
    pub async fn try_run(&self, date: NaiveDate) -> Result<ExportOutcome, ExportError> {
        let items = self.scan_all().await?;
        let (contents, rows) = render_summary(&items)?;

        let staging = &self.config.staging_path;
        write_staging(staging, &contents).await?;

        let key = summary_key(&self.config.key_prefix, date);
        self.object_store
            .upload_file(&self.config.bucket_name, &key, staging)
            .await?;

        Ok(ExportOutcome { key, rows })
    }

    /// Follows the continuation key until the table is exhausted.
    async fn scan_all(&self) -> Result<Vec<Item>, RepositoryError> {
        let mut items = Vec::new();
        let mut start_key: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.repository.scan(start_key.as_deref()).await?;
            pages += 1;
            items.extend(page.items);

            match page.last_evaluated_key {
                Some(key) => start_key = Some(key),
                None => break,
            }
        }

        tracing::debug!(pages, items = items.len(), "Scanned table");
        Ok(items)
    }
}

/// Renders the items as CSV, returning the file contents and the row count.
///
/// The header comes from the first item. An empty table yields an empty file.
fn render_summary(items: &[Item]) -> Result<(Vec<u8>, usize), ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let Some(first) = items.first() else {
        return Ok((finish(writer)?, 0));
    };

    let header = header_row(first);
    writer.write_record(&header)?;

    for item in items {
        let row = item_row(&header, item);
        if !row.dropped.is_empty() {
            tracing::warn!(
                object_id = %item.object_id,
                dropped = ?row.dropped,
                "Attributes missing from summary header were dropped"
            );
        }
        writer.write_record(&row.cells)?;
    }

    Ok((finish(writer)?, items.len()))
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, ExportError> {
    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))
}

async fn write_staging(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    let staging_error = |source| ExportError::Staging {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(staging_error)?;
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(staging_error)
}
