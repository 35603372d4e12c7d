//! Churn Engine — orchestrator
//!
//! Ties together input validation, feature engineering, scaling,
//! classification, and tier mapping. Artifacts are loaded once at
//! construction and never mutated afterwards, so a shared reference is all
//! any number of callers needs.

use std::path::Path;

use types::assessment::RiskAssessment;
use types::errors::ScoringError;
use types::profile::CustomerProfile;

use crate::artifacts::ArtifactBundle;
use crate::features;
use crate::tiers;

/// Churn scoring engine.
///
/// Immutable after construction; `evaluate` is synchronous and
/// side-effect-free.
#[derive(Debug, Clone)]
pub struct ChurnEngine {
    artifacts: ArtifactBundle,
}

impl ChurnEngine {
    /// Load artifacts from a directory and build an engine.
    ///
    /// Any artifact or schema failure here is fatal: the caller must not
    /// proceed to serve requests.
    pub fn load(artifact_dir: &Path) -> Result<Self, ScoringError> {
        let artifacts = ArtifactBundle::load(artifact_dir)?;
        Ok(Self { artifacts })
    }

    /// Build an engine from an already-validated bundle.
    pub fn from_artifacts(artifacts: ArtifactBundle) -> Self {
        Self { artifacts }
    }

    /// Version string of the loaded model artifact.
    pub fn model_version(&self) -> &str {
        &self.artifacts.model.version
    }

    /// Score one customer profile.
    ///
    /// Pipeline: validate input, build the ordered feature vector, apply the
    /// fitted scaler, score the churn probability, map to a tier. Collaborator
    /// errors propagate unmodified; there is nothing to retry.
    pub fn evaluate(&self, profile: &CustomerProfile) -> Result<RiskAssessment, ScoringError> {
        profile.validate()?;

        let vector = features::build_features(profile, &self.artifacts.feature_names)?;
        let scaled = self.artifacts.scaler.transform(&vector)?;
        let probability = self.artifacts.model.classifier.predict_probability(scaled.values())?;

        let assessment = tiers::assess(probability);
        tracing::debug!(
            probability = assessment.probability,
            tier = ?assessment.risk_tier,
            "scored profile"
        );
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{COMPUTED_FEATURES, GEOGRAPHY_GERMANY, IS_ACTIVE_MEMBER};
    use crate::model::{ChurnClassifier, LogisticModel, ModelArtifact};
    use crate::scaler::StandardScaler;
    use chrono::Utc;
    use types::assessment::RiskTier;
    use types::errors::InputError;
    use types::profile::{Gender, Geography};

    fn canonical_names() -> Vec<String> {
        COMPUTED_FEATURES.iter().map(|s| s.to_string()).collect()
    }

    /// Logistic model with a single non-zero weight on one named feature,
    /// identity scaler. Probability is then sigmoid(weight * feature).
    fn make_engine(weight_on: &str, weight: f64, intercept: f64) -> ChurnEngine {
        let names = canonical_names();
        let weights = names
            .iter()
            .map(|n| if n == weight_on { weight } else { 0.0 })
            .collect();

        let model = ModelArtifact {
            version: "unit-test".to_string(),
            trained_at: Utc::now(),
            classifier: ChurnClassifier::Logistic(LogisticModel { weights, intercept }),
        };
        let scaler = StandardScaler {
            mean: vec![0.0; names.len()],
            scale: vec![1.0; names.len()],
        };

        ChurnEngine::from_artifacts(
            ArtifactBundle::from_parts(model, scaler, names).unwrap(),
        )
    }

    fn make_profile() -> CustomerProfile {
        CustomerProfile {
            credit_score: 650,
            age: 40,
            tenure: 5,
            balance: 50_000.0,
            num_products: 1,
            has_credit_card: true,
            is_active_member: true,
            estimated_salary: 50_000.0,
            geography: Geography::France,
            gender: Gender::Male,
        }
    }

    #[test]
    fn test_evaluate_end_to_end() {
        // Weight 4 on Geography_Germany, intercept -2:
        // France → sigmoid(-2) ≈ 0.119 → Low
        // Germany → sigmoid(2) ≈ 0.881 → High
        let engine = make_engine(GEOGRAPHY_GERMANY, 4.0, -2.0);

        let mut profile = make_profile();
        let low = engine.evaluate(&profile).unwrap();
        assert_eq!(low.risk_tier, RiskTier::Low);

        profile.geography = Geography::Germany;
        let high = engine.evaluate(&profile).unwrap();
        assert_eq!(high.risk_tier, RiskTier::High);
        assert!(high.probability > low.probability);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let engine = make_engine(IS_ACTIVE_MEMBER, -1.5, 0.5);
        let profile = make_profile();
        let a = engine.evaluate(&profile).unwrap();
        let b = engine.evaluate(&profile).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_evaluate_rejects_invalid_input() {
        let engine = make_engine(IS_ACTIVE_MEMBER, 0.0, 0.0);
        let mut profile = make_profile();
        profile.age = 150;
        let err = engine.evaluate(&profile).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::Input(InputError::OutOfRange { field: "age", .. })
        ));
    }

    #[test]
    fn test_evaluate_zero_salary_scores_without_error() {
        let engine = make_engine(IS_ACTIVE_MEMBER, 0.0, 0.0);
        let mut profile = make_profile();
        profile.estimated_salary = 0.0;
        let assessment = engine.evaluate(&profile).unwrap();
        // All weights zero → sigmoid(0) = 0.5 → Medium
        assert_eq!(assessment.risk_tier, RiskTier::Medium);
        assert!((assessment.probability - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_scaler_shifts_probability() {
        // Weight 1 on IsActiveMember; scaler centers it at its mean 0.5
        // with scale 0.5: active → (1 - 0.5)/0.5 = 1, inactive → -1.
        let names = canonical_names();
        let weights: Vec<f64> = names
            .iter()
            .map(|n| if n == IS_ACTIVE_MEMBER { 1.0 } else { 0.0 })
            .collect();
        let mut mean = vec![0.0; names.len()];
        let mut scale = vec![1.0; names.len()];
        let idx = names.iter().position(|n| n == IS_ACTIVE_MEMBER).unwrap();
        mean[idx] = 0.5;
        scale[idx] = 0.5;

        let model = ModelArtifact {
            version: "unit-test".to_string(),
            trained_at: Utc::now(),
            classifier: ChurnClassifier::Logistic(LogisticModel { weights, intercept: 0.0 }),
        };
        let engine = ChurnEngine::from_artifacts(
            ArtifactBundle::from_parts(model, StandardScaler { mean, scale }, names).unwrap(),
        );

        let mut profile = make_profile();
        let active = engine.evaluate(&profile).unwrap();
        profile.is_active_member = false;
        let inactive = engine.evaluate(&profile).unwrap();

        // sigmoid(1) and sigmoid(-1), symmetric around 0.5
        assert!((active.probability + inactive.probability - 1.0).abs() < 1e-12);
        assert!(active.probability > inactive.probability);
    }

    #[test]
    fn test_model_version_exposed() {
        let engine = make_engine(IS_ACTIVE_MEMBER, 0.0, 0.0);
        assert_eq!(engine.model_version(), "unit-test");
    }
}
