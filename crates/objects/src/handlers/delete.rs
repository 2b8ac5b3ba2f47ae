//! DELETE /objects/{object_id} - remove an item.

use objects_core::gateway::{extract_id, GatewayRequest, GatewayResponse, RequestError, ResponseBody};

use super::error::repository_error_response;
use crate::state::AppState;

/// Deletes an item. Deleting an unknown identifier still succeeds.
pub async fn delete_item(
    state: &AppState,
    request: &GatewayRequest,
) -> Result<GatewayResponse, RequestError> {
    let object_id = extract_id(request)?;

    match state.repository.delete_item(object_id).await {
        Ok(()) => {
            tracing::info!(object_id = %object_id, "Deleted item");
            Ok(GatewayResponse::ok(&ResponseBody::success()))
        }
        Err(e) => Ok(repository_error_response(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{create_toyota, failing_state, with_id};

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let state = AppState::default();
        let created = create_toyota(&state).await;
        let object_id = created["object_id"].as_str().unwrap();

        for _ in 0..2 {
            let response = delete_item(&state, &with_id(object_id)).await.unwrap();
            assert_eq!(response.status_code, 200);
            assert_eq!(response.body, r#"{"success":true}"#);
        }

        assert!(state.repository.get_item(object_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_without_path_parameter() {
        let result = delete_item(&AppState::default(), &GatewayRequest::new()).await;
        assert_eq!(result, Err(RequestError::MissingParameter("object_id")));
    }

    #[tokio::test]
    async fn test_delete_backend_fault() {
        let response = delete_item(&failing_state(), &with_id("abc")).await.unwrap();
        assert_eq!(response.status_code, 500);
    }
}
