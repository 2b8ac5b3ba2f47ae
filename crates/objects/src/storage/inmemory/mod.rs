//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of `ItemRepository` that
//! stores all items in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. It mimics the
//! DynamoDB semantics the handlers rely on (unconditional put, upsert on
//! update, idempotent delete, paginated scan), which makes it the fake used
//! by every handler test and the backend of local development.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::with_page_size(2);
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
