//! POST /objects - create an item.

use chrono::Utc;

use objects_core::gateway::{extract_body, GatewayRequest, GatewayResponse, RequestError, ResponseBody};
use objects_core::item::CreateItemRequest;

use super::error::repository_error_response;
use crate::state::AppState;

/// Creates an item from a body carrying `make`, `model`, `category` and `year`.
///
/// The new item gets a fresh identifier and a single timestamp used for both
/// `created_at` and `updated_at`.
pub async fn create_item(
    state: &AppState,
    request: &GatewayRequest,
) -> Result<GatewayResponse, RequestError> {
    let body = extract_body(request)?;
    let payload = CreateItemRequest::from_json(&body)?;
    let item = payload.into_item(Utc::now());

    if let Err(e) = state.repository.put_item(&item).await {
        return Ok(repository_error_response(&e));
    }

    tracing::info!(object_id = %item.object_id, "Created item");
    Ok(GatewayResponse::ok(&ResponseBody::created(item)))
}
