//! Reference panel: typical per-class feature ranges.
//!
//! Purely informational text backing the documentation panel; never
//! consumed by the encoder or the model.

use serde::Serialize;

/// Typical feature ranges observed for one weather type in the training
/// dataset.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherTypeProfile {
    pub weather_type: &'static str,
    pub temperature_c: &'static str,
    pub humidity_pct: &'static str,
    pub wind_speed_kmh: &'static str,
    pub precipitation_pct: &'static str,
    pub pressure_hpa: &'static str,
    pub uv_index: &'static str,
    pub visibility_km: &'static str,
    pub cloud_cover: &'static str,
    pub season: &'static str,
    pub location: &'static str,
}

/// The four class profiles shown in the reference panel.
pub fn typical_profiles() -> [WeatherTypeProfile; 4] {
    [
        WeatherTypeProfile {
            weather_type: "Sunny",
            temperature_c: "-20 to 109",
            humidity_pct: "20 to 109",
            wind_speed_kmh: "0 to 25",
            precipitation_pct: "0 to 109",
            pressure_hpa: "800 to 1200",
            uv_index: "0 to 14",
            visibility_km: "0 to 20",
            cloud_cover: "clear",
            season: "all",
            location: "coastal, inland, mountain",
        },
        WeatherTypeProfile {
            weather_type: "Cloudy",
            temperature_c: "-20 to 84",
            humidity_pct: "20 to 109",
            wind_speed_kmh: "0 to 36",
            precipitation_pct: "10 to 109",
            pressure_hpa: "800 to 1200",
            uv_index: "0 to 14",
            visibility_km: "0 to 20",
            cloud_cover: "partly cloudy, cloudy, overcast",
            season: "all",
            location: "coastal, inland, mountain",
        },
        WeatherTypeProfile {
            weather_type: "Rainy",
            temperature_c: "-20 to 84",
            humidity_pct: "20 to 109",
            wind_speed_kmh: "0 to 48",
            precipitation_pct: "10 to 109",
            pressure_hpa: "800 to 1200",
            uv_index: "0 to 14",
            visibility_km: "0 to 20",
            cloud_cover: "partly cloudy, cloudy, overcast",
            season: "all",
            location: "coastal, inland, mountain",
        },
        WeatherTypeProfile {
            weather_type: "Snowy",
            temperature_c: "-25 to -1",
            humidity_pct: "41 to 109",
            wind_speed_kmh: "3 to 50",
            precipitation_pct: "10 to 109",
            pressure_hpa: "800 to 1200",
            uv_index: "0 to 14",
            visibility_km: "0 to 20",
            cloud_cover: "partly cloudy, cloudy, overcast",
            season: "winter",
            location: "coastal, inland, mountain",
        },
    ]
}
