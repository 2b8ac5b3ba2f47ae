use std::{env, path::PathBuf};

use thiserror::Error;

/// Errors raised while reading configuration at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value {value:?} for environment variable {var}")]
    Invalid { var: &'static str, value: String },
}

/// Storage configuration shared by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Name of the item table.
    pub table_name: String,
    /// Items per scan page for the in-memory backend (default: 100)
    #[cfg_attr(feature = "dynamodb", allow(dead_code))]
    pub scan_page_size: usize,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - Item table name (required)
    /// - `SCAN_PAGE_SIZE` - In-memory scan page size (default: 100)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            table_name: required(&lookup, "TABLE_NAME")?,
            scan_page_size: parsed(&lookup, "SCAN_PAGE_SIZE", 100)?,
        })
    }
}

/// Configuration of the summary export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Bucket receiving the summary file.
    pub bucket_name: String,
    /// Key prefix, joined to the file name with a `/`.
    pub key_prefix: String,
    /// Local scratch file the summary is assembled in (default: `<tmp>/summary.csv`)
    pub staging_path: PathBuf,
    /// Root directory of the filesystem object store (default: `object-store`)
    /// Note: Only used by the `inmemory` backend.
    #[cfg_attr(feature = "dynamodb", allow(dead_code))]
    pub object_store_root: PathBuf,
}

impl ExportConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BUCKET_NAME` - Destination bucket (required)
    /// - `KEY_PREFIX` - Destination key prefix (required)
    /// - `STAGING_PATH` - Staging file path (default: `<tmp>/summary.csv`)
    /// - `OBJECT_STORE_ROOT` - Filesystem object store root (default: `object-store`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bucket_name: required(&lookup, "BUCKET_NAME")?,
            key_prefix: required(&lookup, "KEY_PREFIX")?,
            staging_path: lookup("STAGING_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| env::temp_dir().join("summary.csv")),
            object_store_root: lookup("OBJECT_STORE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("object-store")),
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, ConfigError> {
    lookup(var)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn parsed(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => match value.parse() {
            Ok(parsed) if parsed > 0 => Ok(parsed),
            _ => Err(ConfigError::Invalid { var, value }),
        },
    }
}
