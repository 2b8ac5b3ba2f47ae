//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `ItemRepository` and
//! `ObjectStore` traits defined in `objects_core::storage`. The backend is
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-memory item table, exports land on the local filesystem
//! - `dynamodb`: AWS DynamoDB item table, exports upload to S3
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time. The in-memory backends are always compiled for tests.
//!
//! # Examples
//!
//! Build with the in-memory backend (default):
//! ```bash
//! cargo build -p objects
//! ```
//!
//! Build with DynamoDB and S3:
//! ```bash
//! cargo build -p objects --no-default-features --features dynamodb
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p objects --features dynamodb"
);

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod object_store;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg(test)]
pub mod failing;
