//! Shared types and logic for the Weather Type Classifier.
//!
//! This crate contains the domain models, the feature schema table, and the
//! feature encoder shared between the backend and the browser form (via WASM).

pub mod encoder;
pub mod models;
pub mod schema;

pub use encoder::*;
pub use models::*;
pub use schema::*;
