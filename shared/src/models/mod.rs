//! Domain models for the Weather Type Classifier

mod observation;
mod prediction;
mod profile;

pub use observation::*;
pub use prediction::*;
pub use profile::*;
