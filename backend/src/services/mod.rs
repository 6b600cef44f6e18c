//! Business logic services for the Weather Type Classifier

pub mod prediction;

pub use prediction::PredictionService;
