//! Backend handlers

use axum::Json;
use serde::Serialize;

/// The one payload this service exists to serve.
pub const GREETING: &str = "Hello, world!";

/// Static greeting
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: GREETING.to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: String,
}

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
