//! AWS Lambda entry points.
//!
//! One process serves one handler: the function's command line picks it.

use std::sync::Arc;

use clap::ValueEnum;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

use objects_core::gateway::{GatewayRequest, GatewayResponse};

use crate::{
    export::ExportJob,
    handlers::{dispatch, HandlerKind},
    state::AppState,
};

/// Handlers deployable as a Lambda function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LambdaHandler {
    Create,
    Get,
    Update,
    Delete,
    List,
    /// Scheduled summary export; accepts any event payload.
    Export,
}

impl LambdaHandler {
    /// The request handler behind this function, `None` for the export.
    pub fn request_handler(self) -> Option<HandlerKind> {
        match self {
            Self::Create => Some(HandlerKind::Create),
            Self::Get => Some(HandlerKind::Get),
            Self::Update => Some(HandlerKind::Update),
            Self::Delete => Some(HandlerKind::Delete),
            Self::List => Some(HandlerKind::List),
            Self::Export => None,
        }
    }
}

/// Serves proxy events with a request handler until the runtime shuts down.
pub async fn serve_requests(kind: HandlerKind, state: AppState) -> Result<(), Error> {
    tracing::info!(handler = ?kind, "Starting Lambda runtime");
    run(service_fn(|event| handle_request(kind, &state, event))).await
}

async fn handle_request(
    kind: HandlerKind,
    state: &AppState,
    event: LambdaEvent<GatewayRequest>,
) -> Result<GatewayResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, handler = ?kind, "Handling event");
    Ok(dispatch(kind, state, &event.payload).await)
}

/// Serves scheduled events with the export until the runtime shuts down.
pub async fn serve_export(job: Arc<ExportJob>) -> Result<(), Error> {
    tracing::info!("Starting Lambda runtime for export");
    run(service_fn(|event| handle_export(&job, event))).await
}

async fn handle_export(
    job: &ExportJob,
    event: LambdaEvent<serde_json::Value>,
) -> Result<(), Error> {
    tracing::debug!(request_id = %event.context.request_id, "Handling scheduled event");
    job.run().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_handlers() {
        assert_eq!(
            LambdaHandler::Delete.request_handler(),
            Some(HandlerKind::Delete)
        );
        assert_eq!(LambdaHandler::Export.request_handler(), None);
    }

    #[tokio::test]
    async fn test_handle_request_dispatches_payload() {
        let state = AppState::default();
        let payload: GatewayRequest = serde_json::from_str(
            r#"{"httpMethod": "GET", "pathParameters": {"object_id": "missing"}}"#,
        )
        .unwrap();
        let event = LambdaEvent::new(payload, lambda_runtime::Context::default());

        let response = handle_request(HandlerKind::Get, &state, event).await.unwrap();

        assert_eq!(response.status_code, 404);
    }
}
