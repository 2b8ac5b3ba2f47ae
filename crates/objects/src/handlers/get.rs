//! GET /objects/{object_id} - fetch one item.

use objects_core::gateway::{extract_id, GatewayRequest, GatewayResponse, RequestError, ResponseBody};
use objects_core::storage::RepositoryError;

use super::error::repository_error_response;
use crate::state::AppState;

pub async fn get_item(
    state: &AppState,
    request: &GatewayRequest,
) -> Result<GatewayResponse, RequestError> {
    let object_id = extract_id(request)?;

    match state.repository.get_item(object_id).await {
        Ok(Some(item)) => Ok(GatewayResponse::ok(&ResponseBody::found(item))),
        Ok(None) => Ok(repository_error_response(&RepositoryError::NotFound {
            id: object_id.to_string(),
        })),
        Err(e) => Ok(repository_error_response(&e)),
    }
}
