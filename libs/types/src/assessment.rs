//! Risk assessment output types

use serde::{Deserialize, Serialize};

/// Discretized churn risk tier for human-readable display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    /// risk percent <= 30 — stable customer
    Low,
    /// 30 < risk percent <= 70 — elevated churn risk
    Medium,
    /// risk percent > 70 — retention action required
    High,
}

/// Result of scoring one customer profile.
///
/// Transient: produced per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Churn probability for the positive class, clamped to [0, 1]
    pub probability: f64,
    pub risk_tier: RiskTier,
    /// Ordered advisory strings for the tier
    pub recommendation: Vec<String>,
}

impl RiskAssessment {
    /// Probability expressed as a percentage for display.
    pub fn risk_percent(&self) -> f64 {
        self.probability * 100.0
    }
}
