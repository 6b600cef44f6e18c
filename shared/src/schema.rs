//! The model's input feature schema.
//!
//! The classifier was trained against a fixed column order; feeding it a
//! vector in any other order silently corrupts every prediction. The order
//! is therefore an explicit, versioned constant checked against the model
//! artifact's declared feature list at startup.

use serde::{Deserialize, Serialize};

/// Version of the feature schema. Bump on any change to
/// [`FEATURE_SCHEMA`], including reorderings.
pub const SCHEMA_VERSION: u32 = 1;

/// Number of features the model consumes.
pub const FEATURE_COUNT: usize = 23;

/// The model's input columns, in training-time order.
pub const FEATURE_SCHEMA: [&str; FEATURE_COUNT] = [
    "Temperature",
    "Humidity",
    "Wind Speed",
    "Precipitation (%)",
    "Cloud Cover",
    "Atmospheric Pressure",
    "UV Index",
    "Visibility (km)",
    "Wind_x_Temp",
    "Vis_x_Humid",
    "visibility_band_High",
    "visibility_band_Low",
    "visibility_band_Medium",
    "uv_group_High",
    "uv_group_Low",
    "uv_group_Medium",
    "Season_Autumn",
    "Season_Spring",
    "Season_Summer",
    "Season_Winter",
    "Location_coastal",
    "Location_inland",
    "Location_mountain",
];

/// Position of a feature name in the schema, if it is part of it.
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_SCHEMA.iter().position(|&f| f == name)
}

/// An encoded observation: exactly [`FEATURE_COUNT`] values in
/// [`FEATURE_SCHEMA`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Values in schema order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Value of a named feature, if the name is in the schema.
    pub fn get(&self, name: &str) -> Option<f64> {
        feature_index(name).map(|i| self.values[i])
    }

    /// Number of entries (always [`FEATURE_COUNT`]).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// (name, value) pairs in schema order, for display and the WASM surface.
    pub fn to_named_pairs(&self) -> Vec<(&'static str, f64)> {
        FEATURE_SCHEMA
            .iter()
            .zip(self.values.iter())
            .map(|(name, value)| (*name, *value))
            .collect()
    }
}
