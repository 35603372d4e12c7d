use serde::Serialize;
use types::assessment::{RiskAssessment, RiskTier};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub request_id: Uuid,
    pub probability: f64,
    pub risk_percent: f64,
    pub risk_tier: RiskTier,
    pub recommendation: Vec<String>,
}

impl ScoreResponse {
    pub fn from_assessment(assessment: RiskAssessment) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            probability: assessment.probability,
            risk_percent: assessment.risk_percent(),
            risk_tier: assessment.risk_tier,
            recommendation: assessment.recommendation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_version: String,
}
