//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{about, health, home};

/// Create the API router.
///
/// The route table is built once at startup and never mutated. Unregistered
/// paths fall through to axum's default not-found response.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}
