//! HTTP handlers for the Weather Type Classifier

pub mod health;
pub mod predict;
pub mod reference;

pub use health::health_check;
pub use predict::predict_weather;
pub use reference::get_reference_profiles;
