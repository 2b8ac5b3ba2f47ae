//! GET /objects - list items.

use objects_core::gateway::{GatewayRequest, GatewayResponse, RequestError, ResponseBody};

use super::error::repository_error_response;
use crate::state::AppState;

/// Returns the first scan page. Tables larger than one page are truncated.
pub async fn list_items(
    state: &AppState,
    _request: &GatewayRequest,
) -> Result<GatewayResponse, RequestError> {
    match state.repository.scan(None).await {
        Ok(page) => {
            if !page.is_last() {
                tracing::debug!(returned = page.items.len(), "Listing truncated to first page");
            }
            Ok(GatewayResponse::ok(&ResponseBody::items(page.items)))
        }
        Err(e) => Ok(repository_error_response(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::delete::delete_item;
    use crate::handlers::testing::{create_toyota, failing_state, put_epoch_item, with_id};
    use crate::storage::inmemory::InMemoryRepository;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_empty_table() {
        let response = list_items(&AppState::default(), &GatewayRequest::new())
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"items":[]}"#);
    }

    #[tokio::test]
    async fn test_list_after_creates_and_deletes() {
        let state = AppState::default();
        let mut ids = Vec::new();
        for _ in 0..4 {
            let created = create_toyota(&state).await;
            ids.push(created["object_id"].as_str().unwrap().to_string());
        }
        delete_item(&state, &with_id(&ids[0])).await.unwrap();

        let response = list_items(&state, &GatewayRequest::new()).await.unwrap();

        let body = response.body_json().unwrap();
        assert_eq!(body["items"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_list_returns_first_page_only() {
        let state = AppState::with_repository(Arc::new(InMemoryRepository::with_page_size(2)));
        for _ in 0..3 {
            create_toyota(&state).await;
        }

        let response = list_items(&state, &GatewayRequest::new()).await.unwrap();

        let body = response.body_json().unwrap();
        assert_eq!(body["items"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_list_includes_item_with_numeric_timestamp() {
        let state = AppState::default();
        create_toyota(&state).await;
        put_epoch_item(&state, "legacy-1").await;

        let response = list_items(&state, &GatewayRequest::new()).await.unwrap();

        assert_eq!(response.status_code, 200);
        let body = response.body_json().unwrap();
        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items
            .iter()
            .any(|item| item["object_id"] == "legacy-1" && item["created_at"] == 1700000000.0));
    }

    #[tokio::test]
    async fn test_list_backend_fault() {
        let response = list_items(&failing_state(), &GatewayRequest::new())
            .await
            .unwrap();
        assert_eq!(response.status_code, 500);
    }
}
