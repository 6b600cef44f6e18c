//! Feature encoder: maps a raw observation to the model's input vector.
//!
//! This must reproduce the training pipeline's transformation exactly. A
//! deviation here does not error; it silently degrades every prediction.

use crate::models::RawObservation;
use crate::schema::{feature_index, FeatureVector, FEATURE_COUNT};

/// UV index bin. Upper bounds are inclusive (`<=`), unlike
/// [`VisibilityBand`]. The asymmetry matches the training pipeline and is
/// deliberate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvGroup {
    Low,
    Medium,
    High,
}

impl UvGroup {
    /// Bin a UV index: ≤2 Low, ≤7 Medium, above High.
    pub fn of(uv_index: f64) -> Self {
        if uv_index <= 2.0 {
            UvGroup::Low
        } else if uv_index <= 7.0 {
            UvGroup::Medium
        } else {
            UvGroup::High
        }
    }

    /// Name of the one-hot column this bin sets to 1.
    pub fn feature_name(&self) -> &'static str {
        match self {
            UvGroup::Low => "uv_group_Low",
            UvGroup::Medium => "uv_group_Medium",
            UvGroup::High => "uv_group_High",
        }
    }
}

/// Visibility bin. Upper bounds are exclusive (`<`), so visibility of
/// exactly 5 km or 10 km lands in the higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityBand {
    Low,
    Medium,
    High,
}

impl VisibilityBand {
    /// Band a visibility reading: <5 Low, <10 Medium, otherwise High.
    pub fn of(visibility_km: f64) -> Self {
        if visibility_km < 5.0 {
            VisibilityBand::Low
        } else if visibility_km < 10.0 {
            VisibilityBand::Medium
        } else {
            VisibilityBand::High
        }
    }

    /// Name of the one-hot column this band sets to 1.
    pub fn feature_name(&self) -> &'static str {
        match self {
            VisibilityBand::Low => "visibility_band_Low",
            VisibilityBand::Medium => "visibility_band_Medium",
            VisibilityBand::High => "visibility_band_High",
        }
    }
}

/// Encode a raw observation into the model's feature vector.
///
/// Pure and total over the declared domains; the caller is responsible for
/// clamping (see [`RawObservation::clamped`]). Schema names not populated
/// here stay 0, so the vector keeps its fixed width even if the schema
/// grows a column the encoder does not know about.
pub fn encode(obs: &RawObservation) -> FeatureVector {
    let named: [(&'static str, f64); 14] = [
        ("Temperature", obs.temperature),
        ("Humidity", obs.humidity),
        ("Wind Speed", obs.wind_speed),
        ("Precipitation (%)", obs.precipitation),
        ("Atmospheric Pressure", obs.atmospheric_pressure),
        ("UV Index", obs.uv_index),
        ("Visibility (km)", obs.visibility),
        ("Cloud Cover", f64::from(obs.cloud_cover.ordinal())),
        ("Wind_x_Temp", obs.wind_speed * obs.temperature),
        ("Vis_x_Humid", obs.visibility * obs.humidity),
        (UvGroup::of(obs.uv_index).feature_name(), 1.0),
        (VisibilityBand::of(obs.visibility).feature_name(), 1.0),
        (obs.season.feature_name(), 1.0),
        (obs.location.feature_name(), 1.0),
    ];

    let mut values = [0.0; FEATURE_COUNT];
    for (name, value) in named {
        if let Some(index) = feature_index(name) {
            values[index] = value;
        }
    }
    FeatureVector::new(values)
}
