//! HTTP handler for the submit-predict endpoint

use axum::{extract::State, Json};

use shared::{PredictionResult, RawObservation};

use crate::error::AppResult;
use crate::services::PredictionService;
use crate::AppState;

/// Run one submit-predict cycle over the posted readings.
///
/// Missing fields take the form defaults; out-of-domain numbers are
/// clamped. Model failures surface as MODEL_ERROR responses.
pub async fn predict_weather(
    State(state): State<AppState>,
    Json(observation): Json<RawObservation>,
) -> AppResult<Json<PredictionResult>> {
    let service = PredictionService::new(state.model.clone());
    let result = service.predict(&observation)?;
    Ok(Json(result))
}
