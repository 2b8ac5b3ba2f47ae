//! Destinations for exported files.
//!
//! - `filesystem`: copies files under a local root, one directory per bucket
//! - `s3`: uploads to Amazon S3 (`dynamodb` feature)
//! - `inmemory`: keeps uploads in memory (tests only)

#[cfg(any(test, feature = "inmemory"))]
mod filesystem;

#[cfg(test)]
mod inmemory;

#[cfg(feature = "dynamodb")]
mod s3;

#[cfg(any(test, feature = "inmemory"))]
pub use filesystem::FilesystemObjectStore;

#[cfg(test)]
pub use inmemory::InMemoryObjectStore;

#[cfg(feature = "dynamodb")]
pub use s3::S3ObjectStore;
