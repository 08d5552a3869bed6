//! Health check handlers

use axum::{extract::State, Json};
use core_kernel::HealthCheckResult;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// The advisory service is optional; its state never makes the API unhealthy
    pub advisory: HealthCheckResult,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        advisory: state.advisory.health().await,
    })
}
