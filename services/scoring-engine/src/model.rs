//! Churn classifier
//!
//! The pre-trained binary classifier, deserialized from the model artifact.
//! Two model families are supported: logistic regression and gradient
//! boosted trees (the training pipeline exports either). Both expose one
//! operation: the churn probability for the positive class.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use types::errors::SchemaError;

/// Model artifact: training metadata plus the classifier body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: String,
    pub trained_at: DateTime<Utc>,
    #[serde(flatten)]
    pub classifier: ChurnClassifier,
}

/// Pre-trained binary churn classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model_type", rename_all = "snake_case")]
pub enum ChurnClassifier {
    Logistic(LogisticModel),
    GradientBoosting(GradientBoostingModel),
}

impl ChurnClassifier {
    /// Number of features the model was fitted with.
    pub fn n_features(&self) -> usize {
        match self {
            ChurnClassifier::Logistic(m) => m.weights.len(),
            ChurnClassifier::GradientBoosting(m) => m.n_features,
        }
    }

    /// Internal consistency of the deserialized model.
    pub fn check(&self) -> Result<(), SchemaError> {
        match self {
            ChurnClassifier::Logistic(_) => Ok(()),
            ChurnClassifier::GradientBoosting(m) => m.check(),
        }
    }

    /// Churn probability for the positive class, in [0, 1].
    pub fn predict_probability(&self, values: &[f64]) -> Result<f64, SchemaError> {
        if values.len() != self.n_features() {
            return Err(SchemaError::DimensionMismatch {
                what: "classifier input",
                expected: self.n_features(),
                actual: values.len(),
            });
        }
        match self {
            ChurnClassifier::Logistic(m) => Ok(m.predict_probability(values)),
            ChurnClassifier::GradientBoosting(m) => m.predict_probability(values),
        }
    }
}

/// Logistic regression: `sigmoid(w . x + b)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    fn predict_probability(&self, values: &[f64]) -> f64 {
        let z: f64 = self
            .weights
            .iter()
            .zip(values.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        sigmoid(z)
    }
}

/// Gradient boosted trees: `sigmoid(base_score + sum of leaf values)`.
///
/// Trees are stored as flattened node arrays; child indices always point
/// forward, so traversal terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostingModel {
    pub n_features: usize,
    /// Base prediction in log-odds space
    pub base_score: f64,
    pub trees: Vec<Tree>,
}

impl GradientBoostingModel {
    fn check(&self) -> Result<(), SchemaError> {
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(SchemaError::MalformedModel {
                    detail: format!("tree {} has no nodes", t),
                });
            }
            for (i, node) in tree.nodes.iter().enumerate() {
                if let TreeNode::Split { feature, left, right, .. } = node {
                    if *feature >= self.n_features {
                        return Err(SchemaError::MalformedModel {
                            detail: format!("tree {} splits on feature {} of {}", t, feature, self.n_features),
                        });
                    }
                    // Forward links only; rules out cycles
                    if *left <= i || *right <= i || *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                        return Err(SchemaError::MalformedModel {
                            detail: format!("tree {} node {} has invalid child links", t, i),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn predict_probability(&self, values: &[f64]) -> Result<f64, SchemaError> {
        let mut score = self.base_score;
        for tree in &self.trees {
            score += tree.evaluate(values)?;
        }
        Ok(sigmoid(score))
    }
}

/// One boosted tree as a flattened node array, root at index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    fn evaluate(&self, values: &[f64]) -> Result<f64, SchemaError> {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    let x = values.get(*feature).ok_or_else(|| SchemaError::MalformedModel {
                        detail: format!("tree splits on missing feature {}", feature),
                    })?;
                    index = if *x < *threshold { *left } else { *right };
                }
                None => {
                    return Err(SchemaError::MalformedModel {
                        detail: format!("tree walk reached missing node {}", index),
                    })
                }
            }
        }
    }
}

/// Tree node: an internal split or a leaf contribution in log-odds space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
