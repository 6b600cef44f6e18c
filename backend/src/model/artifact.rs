//! Serialized classifier artifact
//!
//! The trained classifier ships as a JSON decision tree together with the
//! feature list it was trained against. Loading verifies that list against
//! the crate's schema table, turning a silent column-order mismatch into a
//! fail-fast startup error.

use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use shared::{FeatureVector, FEATURE_SCHEMA, SCHEMA_VERSION};

use crate::error::{AppError, AppResult};
use crate::model::WeatherModel;

/// A loaded classifier artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    /// Schema version the artifact was exported against.
    pub schema_version: u32,
    /// Input feature names in training order.
    pub features: Vec<String>,
    tree: TreeNode,
}

/// One node of the serialized decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Split on `features[feature] <= threshold`: left when true.
    Branch {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        label: String,
    },
}

impl ModelArtifact {
    /// Load and verify an artifact from a local path.
    ///
    /// Any failure here is fatal to startup: a process without a usable
    /// model cannot serve predictions.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading model artifact {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("loading model artifact {}", path.display()))
    }

    /// Parse and verify an artifact from its JSON form.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let artifact: ModelArtifact =
            serde_json::from_str(raw).context("parsing model artifact")?;
        artifact.verify_schema()?;
        Ok(artifact)
    }

    /// Assert the artifact's declared input columns equal the schema
    /// table exactly, order included.
    fn verify_schema(&self) -> anyhow::Result<()> {
        if self.schema_version != SCHEMA_VERSION {
            bail!(
                "artifact schema version {} does not match expected {}",
                self.schema_version,
                SCHEMA_VERSION
            );
        }
        if self.features.len() != FEATURE_SCHEMA.len() {
            bail!(
                "artifact declares {} features, expected {}",
                self.features.len(),
                FEATURE_SCHEMA.len()
            );
        }
        for (index, (declared, expected)) in
            self.features.iter().zip(FEATURE_SCHEMA.iter()).enumerate()
        {
            if declared != expected {
                bail!(
                    "artifact feature {} is {:?}, expected {:?}",
                    index,
                    declared,
                    expected
                );
            }
        }
        Ok(())
    }
}

impl WeatherModel for ModelArtifact {
    fn predict(&self, vector: &FeatureVector) -> AppResult<String> {
        let values = vector.as_slice();
        let mut node = &self.tree;
        loop {
            match node {
                TreeNode::Leaf { label } => return Ok(label.clone()),
                TreeNode::Branch {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = values.get(*feature).copied().ok_or_else(|| {
                        AppError::ModelError(format!(
                            "tree references feature index {} outside the {}-wide vector",
                            feature,
                            values.len()
                        ))
                    })?;
                    node = if value <= *threshold { left } else { right };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{encode, RawObservation, FEATURE_COUNT};

    fn artifact_json(features: &[&str], schema_version: u32) -> String {
        serde_json::json!({
            "schema_version": schema_version,
            "features": features,
            "tree": {
                "kind": "branch",
                "feature": 0,
                "threshold": 0.0,
                "left": { "kind": "leaf", "label": "Snowy" },
                "right": { "kind": "leaf", "label": "Sunny" }
            }
        })
        .to_string()
    }

    #[test]
    fn test_load_matching_schema() {
        let raw = artifact_json(&FEATURE_SCHEMA, SCHEMA_VERSION);
        let artifact = ModelArtifact::from_json(&raw).unwrap();
        assert_eq!(artifact.features.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_reject_wrong_version() {
        let raw = artifact_json(&FEATURE_SCHEMA, SCHEMA_VERSION + 1);
        assert!(ModelArtifact::from_json(&raw).is_err());
    }

    #[test]
    fn test_reject_reordered_features() {
        let mut features = FEATURE_SCHEMA.to_vec();
        features.swap(0, 1);
        let raw = artifact_json(&features, SCHEMA_VERSION);
        let err = ModelArtifact::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("feature 0"));
    }

    #[test]
    fn test_reject_missing_feature() {
        let features = &FEATURE_SCHEMA[..FEATURE_COUNT - 1];
        let raw = artifact_json(features, SCHEMA_VERSION);
        assert!(ModelArtifact::from_json(&raw).is_err());
    }

    #[test]
    fn test_tree_walk() {
        let raw = artifact_json(&FEATURE_SCHEMA, SCHEMA_VERSION);
        let artifact = ModelArtifact::from_json(&raw).unwrap();

        // Root splits on Temperature <= 0.
        let cold = RawObservation {
            temperature: -10.0,
            ..RawObservation::default()
        };
        assert_eq!(artifact.predict(&encode(&cold)).unwrap(), "Snowy");

        let warm = RawObservation {
            temperature: 25.0,
            ..RawObservation::default()
        };
        assert_eq!(artifact.predict(&encode(&warm)).unwrap(), "Sunny");
    }

    #[test]
    fn test_load_bundled_artifact() {
        let path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../model/weather_classifier.json"
        );
        let artifact = ModelArtifact::load(path).unwrap();

        let label = artifact.predict(&encode(&RawObservation::default())).unwrap();
        assert_eq!(label, "Sunny");
    }

    #[test]
    fn test_load_missing_artifact_fails() {
        assert!(ModelArtifact::load("no/such/model.json").is_err());
    }

    #[test]
    fn test_out_of_range_feature_index_is_model_error() {
        let raw = serde_json::json!({
            "schema_version": SCHEMA_VERSION,
            "features": FEATURE_SCHEMA,
            "tree": {
                "kind": "branch",
                "feature": 99,
                "threshold": 0.0,
                "left": { "kind": "leaf", "label": "Sunny" },
                "right": { "kind": "leaf", "label": "Rainy" }
            }
        })
        .to_string();
        let artifact = ModelArtifact::from_json(&raw).unwrap();
        let err = artifact.predict(&encode(&RawObservation::default()));
        assert!(matches!(err, Err(AppError::ModelError(_))));
    }
}
