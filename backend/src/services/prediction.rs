//! Prediction dispatcher service

use std::sync::Arc;

use shared::{encode, PredictionResult, RawObservation};

use crate::error::AppResult;
use crate::model::WeatherModel;

/// Dispatches an observation through the encoder and the classifier and
/// resolves display metadata for the result.
pub struct PredictionService {
    model: Arc<dyn WeatherModel>,
}

impl PredictionService {
    pub fn new(model: Arc<dyn WeatherModel>) -> Self {
        Self { model }
    }

    /// Run one submit-predict cycle.
    ///
    /// Model failures are not caught here; they propagate to the handler.
    /// A schema mismatch is a programming error, not a recoverable runtime
    /// condition.
    pub fn predict(&self, observation: &RawObservation) -> AppResult<PredictionResult> {
        let vector = encode(&observation.clamped());
        let label = self.model.predict(&vector)?;
        tracing::debug!("Predicted weather type: {}", label);
        Ok(PredictionResult::for_label(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use shared::FeatureVector;

    /// Stub model returning a fixed label.
    struct FixedLabel(&'static str);

    impl WeatherModel for FixedLabel {
        fn predict(&self, _vector: &FeatureVector) -> AppResult<String> {
            Ok(self.0.to_string())
        }
    }

    /// Stub model that always fails.
    struct Failing;

    impl WeatherModel for Failing {
        fn predict(&self, _vector: &FeatureVector) -> AppResult<String> {
            Err(AppError::ModelError("incompatible input shape".into()))
        }
    }

    #[test]
    fn test_known_label_resolves_asset() {
        let service = PredictionService::new(Arc::new(FixedLabel("Rainy")));
        let result = service.predict(&RawObservation::default()).unwrap();
        assert_eq!(result.weather_type, "Rainy");
        assert_eq!(result.image.as_deref(), Some("rainy.jpg"));
    }

    #[test]
    fn test_unknown_label_forwarded_without_asset() {
        let service = PredictionService::new(Arc::new(FixedLabel("Foggy")));
        let result = service.predict(&RawObservation::default()).unwrap();
        assert_eq!(result.weather_type, "Foggy");
        assert!(result.image.is_none());
    }

    #[test]
    fn test_model_failure_propagates() {
        let service = PredictionService::new(Arc::new(Failing));
        let result = service.predict(&RawObservation::default());
        assert!(matches!(result, Err(AppError::ModelError(_))));
    }

    #[test]
    fn test_out_of_domain_input_is_clamped_not_rejected() {
        let service = PredictionService::new(Arc::new(FixedLabel("Sunny")));
        let obs = RawObservation {
            temperature: 500.0,
            ..RawObservation::default()
        };
        assert!(service.predict(&obs).is_ok());
    }
}
