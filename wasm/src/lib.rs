//! WebAssembly module for the Weather Type Classifier
//!
//! Provides client-side computation for the single-page form:
//! - Feature encoding preview (the exact vector the backend sends the model)
//! - Schema introspection
//! - Display asset lookup

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::schema::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Encode an observation (JSON) into the model's feature vector.
///
/// Returns a JSON object of the 23 named features in schema order.
/// Missing fields take the form defaults, out-of-domain numbers are
/// clamped.
#[wasm_bindgen]
pub fn encode_features(observation_json: &str) -> Result<String, JsValue> {
    let observation: RawObservation = serde_json::from_str(observation_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid observation JSON: {}", e)))?;

    let vector = shared::encode(&observation.clamped());
    let named: serde_json::Map<String, serde_json::Value> = vector
        .to_named_pairs()
        .into_iter()
        .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
        .collect();
    serde_json::to_string(&named)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// The model's input column names, in order, as a JSON array.
#[wasm_bindgen]
pub fn feature_schema() -> String {
    serde_json::to_string(&FEATURE_SCHEMA.to_vec()).unwrap_or_default()
}

/// Version of the feature schema this module encodes against.
#[wasm_bindgen]
pub fn feature_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Display asset filename for a predicted label, empty when unknown.
#[wasm_bindgen]
pub fn weather_image(label: &str) -> String {
    display_asset(label).unwrap_or_default().to_string()
}

/// The form's default observation as JSON.
#[wasm_bindgen]
pub fn default_observation() -> Result<String, JsValue> {
    serde_json::to_string(&RawObservation::default())
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_features_default() {
        let encoded = encode_features("{}").unwrap();
        let named: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&encoded).unwrap();
        assert_eq!(named.len(), 23);
        assert_eq!(named["Temperature"], 20.0); // form default
        assert_eq!(named["Season_Spring"], 1.0);
    }

    #[test]
    fn test_encode_features_keys_in_schema_order() {
        let encoded = encode_features("{}").unwrap();
        let named: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&encoded).unwrap();
        let keys: Vec<_> = named.keys().map(String::as_str).collect();
        assert_eq!(keys, FEATURE_SCHEMA.to_vec());
    }

    #[test]
    fn test_encode_features_rejects_bad_json() {
        assert!(encode_features("not json").is_err());
    }

    #[test]
    fn test_feature_schema_round_trip() {
        let names: Vec<String> = serde_json::from_str(&feature_schema()).unwrap();
        assert_eq!(names.len(), 23);
        assert_eq!(names[0], "Temperature");
        assert_eq!(names[22], "Location_mountain");
    }

    #[test]
    fn test_weather_image_lookup() {
        assert_eq!(weather_image("Sunny"), "sunny.jpg");
        assert_eq!(weather_image("Foggy"), "");
    }

    #[test]
    fn test_default_observation_parses_back() {
        let json = default_observation().unwrap();
        let obs: RawObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(obs, RawObservation::default());
    }
}
