//! HTTP handler for the reference/documentation panel

use axum::Json;

use shared::{typical_profiles, WeatherTypeProfile};

/// Typical per-class feature ranges. Informational only.
pub async fn get_reference_profiles() -> Json<[WeatherTypeProfile; 4]> {
    Json(typical_profiles())
}
