//! Raw meteorological observation models

use serde::{Deserialize, Serialize};

/// Allowed range for temperature (°C)
pub const TEMPERATURE_RANGE: (f64, f64) = (-25.0, 110.0);
/// Allowed range for humidity (%)
pub const HUMIDITY_RANGE: (f64, f64) = (0.0, 109.0);
/// Allowed range for wind speed (km/h)
pub const WIND_SPEED_RANGE: (f64, f64) = (0.0, 50.0);
/// Allowed range for precipitation (%)
pub const PRECIPITATION_RANGE: (f64, f64) = (0.0, 109.0);
/// Allowed range for atmospheric pressure (hPa)
pub const PRESSURE_RANGE: (f64, f64) = (800.0, 1200.0);
/// Allowed range for UV index
pub const UV_INDEX_RANGE: (f64, f64) = (0.0, 14.0);
/// Allowed range for visibility (km)
pub const VISIBILITY_RANGE: (f64, f64) = (0.0, 20.0);

/// A single set of user-supplied meteorological readings.
///
/// One instance is created per prediction request and consumed immediately
/// by the feature encoder. Missing fields deserialize to the form defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawObservation {
    /// Temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Precipitation in %
    pub precipitation: f64,
    /// Atmospheric pressure in hPa
    pub atmospheric_pressure: f64,
    /// UV index
    pub uv_index: f64,
    /// Visibility in km
    pub visibility: f64,
    pub cloud_cover: CloudCover,
    pub season: Season,
    pub location: Location,
}

impl Default for RawObservation {
    fn default() -> Self {
        Self {
            temperature: 20.0,
            humidity: 20.0,
            wind_speed: 10.0,
            precipitation: 10.0,
            atmospheric_pressure: 1000.0,
            uv_index: 5.0,
            visibility: 10.0,
            cloud_cover: CloudCover::Clear,
            season: Season::Spring,
            location: Location::Coastal,
        }
    }
}

impl RawObservation {
    /// Clamp every numeric field to its declared domain.
    ///
    /// The encoder assumes in-domain input; this mirrors the enforced
    /// ranges of the input widgets for callers that bypass them.
    pub fn clamped(&self) -> Self {
        let mut obs = self.clone();
        obs.temperature = obs.temperature.clamp(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1);
        obs.humidity = obs.humidity.clamp(HUMIDITY_RANGE.0, HUMIDITY_RANGE.1);
        obs.wind_speed = obs.wind_speed.clamp(WIND_SPEED_RANGE.0, WIND_SPEED_RANGE.1);
        obs.precipitation = obs
            .precipitation
            .clamp(PRECIPITATION_RANGE.0, PRECIPITATION_RANGE.1);
        obs.atmospheric_pressure = obs
            .atmospheric_pressure
            .clamp(PRESSURE_RANGE.0, PRESSURE_RANGE.1);
        obs.uv_index = obs.uv_index.clamp(UV_INDEX_RANGE.0, UV_INDEX_RANGE.1);
        obs.visibility = obs.visibility.clamp(VISIBILITY_RANGE.0, VISIBILITY_RANGE.1);
        obs
    }
}

/// Observed cloud cover category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CloudCover {
    Clear,
    PartlyCloudy,
    Cloudy,
    Overcast,
}

impl CloudCover {
    /// Ordinal encoding used at training time. The order is fixed and must
    /// never be rearranged.
    pub fn ordinal(&self) -> u8 {
        match self {
            CloudCover::Clear => 0,
            CloudCover::PartlyCloudy => 1,
            CloudCover::Cloudy => 2,
            CloudCover::Overcast => 3,
        }
    }
}

/// Season of the observation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Name of the one-hot column this season sets to 1.
    pub fn feature_name(&self) -> &'static str {
        match self {
            Season::Spring => "Season_Spring",
            Season::Summer => "Season_Summer",
            Season::Autumn => "Season_Autumn",
            Season::Winter => "Season_Winter",
        }
    }
}

/// Location class of the observation site
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Coastal,
    Inland,
    Mountain,
}

impl Location {
    /// Name of the one-hot column this location sets to 1.
    pub fn feature_name(&self) -> &'static str {
        match self {
            Location::Coastal => "Location_coastal",
            Location::Inland => "Location_inland",
            Location::Mountain => "Location_mountain",
        }
    }
}
