//! Item handlers.
//!
//! Each handler takes a gateway request and produces a gateway response,
//! independent of how the request arrived (local HTTP or Lambda). Storage
//! failures are formatted inside the handler; request problems come back as
//! [`RequestError`] and are formatted by [`dispatch`].

pub mod create;
pub mod delete;
pub mod error;
pub mod get;
pub mod health;
pub mod list;
pub mod update;

use objects_core::gateway::{GatewayRequest, GatewayResponse};

use crate::state::AppState;

use error::request_error_response;

/// The request handlers a gateway can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Create,
    Get,
    Update,
    Delete,
    List,
}

/// Runs a handler, turning request errors into formatted responses.
pub async fn dispatch(
    kind: HandlerKind,
    state: &AppState,
    request: &GatewayRequest,
) -> GatewayResponse {
    let result = match kind {
        HandlerKind::Create => create::create_item(state, request).await,
        HandlerKind::Get => get::get_item(state, request).await,
        HandlerKind::Update => update::update_item(state, request).await,
        HandlerKind::Delete => delete::delete_item(state, request).await,
        HandlerKind::List => list::list_items(state, request).await,
    };

    match result {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(handler = ?kind, "Handler rejected request");
            request_error_response(&e)
        }
    }
}
