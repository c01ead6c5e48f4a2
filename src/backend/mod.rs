//! Backend HTTP service: the greeting endpoint

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod handlers;

/// Build the backend router
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest(
            "/v1",
            Router::new().route("/hello", get(handlers::hello)),
        )
        .layer(TraceLayer::new_for_http())
}
