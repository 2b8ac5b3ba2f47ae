mod error;
mod requests;
mod types;
mod value;

pub use error::ItemError;
pub use requests::{CreateItemRequest, CREATE_FIELDS};
pub use types::{timestamp, Item, CREATED_AT, OBJECT_ID, UPDATED_AT};
pub use value::{AttributeMap, AttributeValue};
