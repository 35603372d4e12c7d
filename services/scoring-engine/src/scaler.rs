//! Feature scaler
//!
//! A standard scaler fitted by the training pipeline: per-feature mean and
//! scale arrays applied identically at inference time. Pure value type,
//! loaded from the scaler artifact.

use serde::{Deserialize, Serialize};
use types::errors::SchemaError;
use types::features::FeatureVector;

/// Pre-fitted standard scaler: `scaled[i] = (x[i] - mean[i]) / scale[i]`.
///
/// A zero `scale` entry marks a zero-variance column in the training data;
/// the fitted convention is to leave such columns uncentered-by-scale
/// (divide by 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Number of features the scaler was fitted with.
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Internal consistency: mean and scale must be parallel.
    pub fn check(&self) -> Result<(), SchemaError> {
        if self.mean.len() != self.scale.len() {
            return Err(SchemaError::DimensionMismatch {
                what: "scaler mean/scale",
                expected: self.mean.len(),
                actual: self.scale.len(),
            });
        }
        Ok(())
    }

    /// Apply the fitted transform, preserving names and order.
    pub fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, SchemaError> {
        if features.len() != self.n_features() {
            return Err(SchemaError::DimensionMismatch {
                what: "scaler input",
                expected: self.n_features(),
                actual: features.len(),
            });
        }

        let values = features
            .values()
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| {
                let divisor = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / divisor
            })
            .collect();

        Ok(features.with_values(values))
    }
}
