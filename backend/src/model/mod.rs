//! The classification model collaborator

pub mod artifact;

pub use artifact::{ModelArtifact, TreeNode};

use shared::FeatureVector;

use crate::error::AppResult;

/// Narrow capability interface over the classifier.
///
/// The dispatcher only ever needs "given a feature vector of fixed shape,
/// return a class label", so core logic tests can run against a stub
/// instead of the real trained artifact.
pub trait WeatherModel: Send + Sync {
    /// Classify an encoded observation. The returned label is forwarded
    /// to the caller unvalidated.
    fn predict(&self, vector: &FeatureVector) -> AppResult<String>;
}
