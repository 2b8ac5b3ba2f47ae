//! PUT /objects/{object_id} - refresh an item's modification time.

use chrono::Utc;

use objects_core::gateway::{extract_id, GatewayRequest, GatewayResponse, RequestError, ResponseBody};
use objects_core::item::{timestamp, AttributeMap, AttributeValue, UPDATED_AT};

use super::error::repository_error_response;
use crate::state::AppState;

/// Sets `updated_at` to now and returns only the attributes that changed.
///
/// The request body is ignored. An unknown identifier is not an error: the
/// backend creates an item holding just the identifier and `updated_at`.
pub async fn update_item(
    state: &AppState,
    request: &GatewayRequest,
) -> Result<GatewayResponse, RequestError> {
    let object_id = extract_id(request)?;

    let changes = AttributeMap::from([(
        UPDATED_AT.to_string(),
        AttributeValue::String(timestamp(Utc::now())),
    )]);

    match state.repository.update_item(object_id, &changes).await {
        Ok(updated) => {
            tracing::info!(object_id = %object_id, "Updated item");
            Ok(GatewayResponse::ok(&ResponseBody::updated(updated)))
        }
        Err(e) => Ok(repository_error_response(&e)),
    }
}
