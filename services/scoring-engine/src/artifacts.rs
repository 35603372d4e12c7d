//! Artifact loading
//!
//! Reads the three read-only files the training pipeline ships — classifier,
//! scaler, and ordered feature-name list — and validates the schema contract
//! before the engine may serve. Any absence, corruption, or mismatch here is
//! a fatal startup error, never a per-request error.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use types::errors::{ArtifactError, SchemaError, ScoringError};

use crate::features::COMPUTED_FEATURES;
use crate::model::ModelArtifact;
use crate::scaler::StandardScaler;

/// File names produced by the training pipeline.
pub const MODEL_FILE: &str = "churn_model.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const FEATURES_FILE: &str = "features.json";

/// The three loaded artifacts, validated as a consistent set.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactBundle {
    pub model: ModelArtifact,
    pub scaler: StandardScaler,
    pub feature_names: Vec<String>,
}

impl ArtifactBundle {
    /// Load and validate all artifacts from a directory.
    pub fn load(dir: &Path) -> Result<Self, ScoringError> {
        let model: ModelArtifact = read_json(&dir.join(MODEL_FILE))?;
        let scaler: StandardScaler = read_json(&dir.join(SCALER_FILE))?;
        let feature_names: Vec<String> = read_json(&dir.join(FEATURES_FILE))?;

        tracing::info!(
            model_version = %model.version,
            n_features = feature_names.len(),
            "loaded scoring artifacts"
        );

        Self::from_parts(model, scaler, feature_names)
    }

    /// Assemble a bundle from already-deserialized parts, validating the
    /// schema contract.
    pub fn from_parts(
        model: ModelArtifact,
        scaler: StandardScaler,
        feature_names: Vec<String>,
    ) -> Result<Self, ScoringError> {
        let bundle = Self {
            model,
            scaler,
            feature_names,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Validate the feature-name list against the computable feature set and
    /// check that scaler and classifier dimensions agree with it.
    ///
    /// The feature list is a schema contract, not a positional assumption:
    /// both directions of set membership are enforced.
    fn validate(&self) -> Result<(), SchemaError> {
        let computable: HashSet<&str> = COMPUTED_FEATURES.iter().copied().collect();
        let ordered: HashSet<&str> = self.feature_names.iter().map(String::as_str).collect();

        for name in &self.feature_names {
            if !computable.contains(name.as_str()) {
                return Err(SchemaError::UnknownFeature { name: name.clone() });
            }
        }
        for name in COMPUTED_FEATURES {
            if !ordered.contains(name) {
                return Err(SchemaError::MissingFeature {
                    name: name.to_string(),
                });
            }
        }
        if self.feature_names.len() != COMPUTED_FEATURES.len() {
            // Set equality held, so this can only be a duplicated name
            return Err(SchemaError::DimensionMismatch {
                what: "feature name list",
                expected: COMPUTED_FEATURES.len(),
                actual: self.feature_names.len(),
            });
        }

        self.scaler.check()?;
        if self.scaler.n_features() != self.feature_names.len() {
            return Err(SchemaError::DimensionMismatch {
                what: "scaler",
                expected: self.feature_names.len(),
                actual: self.scaler.n_features(),
            });
        }

        self.model.classifier.check()?;
        if self.model.classifier.n_features() != self.feature_names.len() {
            return Err(SchemaError::DimensionMismatch {
                what: "classifier",
                expected: self.feature_names.len(),
                actual: self.model.classifier.n_features(),
            });
        }

        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let display = path.display().to_string();
    if !path.exists() {
        return Err(ArtifactError::Missing { path: display });
    }
    let raw = fs::read_to_string(path).map_err(|e| ArtifactError::Io {
        path: display.clone(),
        detail: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| ArtifactError::Parse {
        path: display,
        detail: e.to_string(),
    })
}
