//! The gateway contract shared by every handler.
//!
//! Requests and responses follow the API Gateway proxy shape so the same
//! types deserialize straight from a Lambda event and serialize back into
//! one.

mod error;
mod request;
mod response;

pub use error::{request_error_to_status_code, RequestError};
pub use request::{extract_body, extract_id, GatewayRequest, OBJECT_ID_PARAM};
pub use response::{format_response, GatewayResponse, ResponseBody, NOT_FOUND_MESSAGE};
