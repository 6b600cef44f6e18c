//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub schema_version: u32,
}

/// Health check endpoint handler
pub async fn health_check(State(_state): State<AppState>) -> Json<HealthResponse> {
    // The model is a startup precondition: a serving process always has it.
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: shared::SCHEMA_VERSION,
    })
}
