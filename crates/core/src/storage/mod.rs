mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{ObjectStoreError, RepositoryError, Result};
pub use http_mapping::{repository_error_message, repository_error_to_status_code};
pub use traits::{ItemRepository, ObjectStore};
pub use types::ScanPage;
