use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    extract::{Path, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::Response,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use objects_core::gateway::{GatewayRequest, GatewayResponse, OBJECT_ID_PARAM};

use crate::{
    handlers::{dispatch, health::livez, HandlerKind},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let object_routes = Router::new()
        .route("/objects", get(list_objects).post(create_object))
        .route(
            "/objects/{object_id}",
            get(get_object).put(update_object).delete(delete_object),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(object_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

async fn create_object(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let request = gateway_request(&method, &uri, None, &body);
    invoke(HandlerKind::Create, &state, request).await
}

async fn list_objects(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let request = gateway_request(&method, &uri, None, &body);
    invoke(HandlerKind::List, &state, request).await
}

async fn get_object(
    State(state): State<AppState>,
    Path(object_id): Path<String>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let request = gateway_request(&method, &uri, Some(object_id), &body);
    invoke(HandlerKind::Get, &state, request).await
}

async fn update_object(
    State(state): State<AppState>,
    Path(object_id): Path<String>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let request = gateway_request(&method, &uri, Some(object_id), &body);
    invoke(HandlerKind::Update, &state, request).await
}

async fn delete_object(
    State(state): State<AppState>,
    Path(object_id): Path<String>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let request = gateway_request(&method, &uri, Some(object_id), &body);
    invoke(HandlerKind::Delete, &state, request).await
}

async fn invoke(kind: HandlerKind, state: &AppState, request: GatewayRequest) -> Response {
    into_http_response(dispatch(kind, state, &request).await)
}

/// Builds the gateway request the proxy integration would have delivered.
///
/// Bodies that are not UTF-8 are base64-encoded, like the gateway does for
/// binary payloads. An empty body is absent.
fn gateway_request(
    method: &Method,
    uri: &Uri,
    object_id: Option<String>,
    body: &Bytes,
) -> GatewayRequest {
    let mut request = GatewayRequest {
        http_method: Some(method.to_string()),
        path: Some(uri.path().to_string()),
        ..GatewayRequest::default()
    };

    if let Some(object_id) = object_id {
        request = request.with_path_parameter(OBJECT_ID_PARAM, object_id);
    }

    if body.is_empty() {
        return request;
    }

    match std::str::from_utf8(body) {
        Ok(text) => request.with_body(text),
        Err(_) => request.with_binary_body(body),
    }
}

/// Converts a gateway response into an HTTP response.
///
/// Headers that are not valid HTTP are skipped.
fn into_http_response(response: GatewayResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut http_response = Response::new(Body::from(response.body));
    *http_response.status_mut() = status;

    let headers = http_response.headers_mut();
    for (name, value) in &response.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!(header = %name, "Skipping invalid response header"),
        }
    }

    http_response
}
