//! Prediction result models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a single submit-predict cycle.
///
/// Lives only long enough to render; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub request_id: Uuid,
    /// Label returned by the model, forwarded as-is.
    pub weather_type: String,
    /// Display asset key for the label, omitted when the label is not in
    /// the fixed asset table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub predicted_at: DateTime<Utc>,
}

impl PredictionResult {
    /// Build a result for a model label, resolving the display asset.
    pub fn for_label(label: String) -> Self {
        let image = display_asset(&label).map(str::to_string);
        Self {
            request_id: Uuid::new_v4(),
            weather_type: label,
            image,
            predicted_at: Utc::now(),
        }
    }
}

/// Fixed label → display asset table. Labels outside the table resolve to
/// no asset; the label itself is still shown.
pub fn display_asset(label: &str) -> Option<&'static str> {
    match label {
        "Sunny" => Some("sunny.jpg"),
        "Cloudy" => Some("cloudy.jpg"),
        "Snowy" => Some("snowy.jpg"),
        "Rainy" => Some("rainy.jpg"),
        _ => None,
    }
}
