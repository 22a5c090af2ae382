//! axum adapter serving the search handler over plain HTTP.
//!
//! Incoming requests are converted into [`GatewayRequest`]s carrying the raw,
//! still-escaped path segments, so the handler sees exactly what the function
//! gateway would deliver.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use banchan_core::TagStore;

use crate::gateway::{GatewayRequest, GatewayResponse};
use crate::handler::search_tags;

/// Route prefix; the remainder is `{keyword}/{id}`.
pub const SEARCH_PREFIX: &str = "/tags/search/";

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TagStore>,
}

impl AppState {
    pub fn new(store: impl TagStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build the HTTP router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/tags/search/*rest", get(search_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// The catch-all route lets an empty keyword (`/tags/search//2`) through.
async fn search_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let Some(request) = gateway_request_from_path(uri.path()) else {
        return (StatusCode::NOT_FOUND, format!("Not found: {}", uri)).into_response();
    };

    into_http_response(search_tags(state.store.as_ref(), &request).await)
}

/// Split a raw `/tags/search/{keyword}/{id}` path into a gateway request.
///
/// Returns `None` unless exactly two segments follow the prefix. Segments are
/// passed through undecoded.
pub fn gateway_request_from_path(path: &str) -> Option<GatewayRequest> {
    let rest = path.strip_prefix(SEARCH_PREFIX)?;
    let (keyword, page) = rest.split_once('/')?;
    if page.contains('/') {
        return None;
    }

    let mut request = GatewayRequest::search(keyword, page);
    request.path = path.to_string();
    Some(request)
}

/// Convert a gateway response into an HTTP response.
///
/// Header pairs that are not valid HTTP are dropped with a warning.
pub fn into_http_response(response: GatewayResponse) -> Response {
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
            _ => warn!(
                subsystem = "api",
                component = "http",
                header = %name,
                "Dropping invalid response header"
            ),
        }
    }

    http_response
}
