//! Route definitions for the Weather Type Classifier

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Submit-predict cycle
        .route("/predictions", post(handlers::predict_weather))
        // Reference panel: typical per-class feature ranges
        .route("/reference", get(handlers::get_reference_profiles))
}
