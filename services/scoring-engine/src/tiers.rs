//! Risk tier classification
//!
//! Maps a churn probability onto the Low/Medium/High display tiers and the
//! static, tier-keyed recommendation lists. Thresholds live in one ordered
//! band table so they stay data-driven and independently testable.

use types::assessment::{RiskAssessment, RiskTier};

// ── Tier band table ──────────────────────────────────────────────────────

/// One tier band over risk percent: `(lower, upper]`.
#[derive(Debug, Clone, Copy)]
pub struct TierBand {
    /// Exclusive lower bound (risk percent)
    pub lower: f64,
    /// Inclusive upper bound (risk percent)
    pub upper: f64,
    pub tier: RiskTier,
    pub recommendations: &'static [&'static str],
}

/// Tier bands evaluated in order.
///
/// | Risk percent | Tier   |
/// |--------------|--------|
/// | > 70         | High   |
/// | 30 – 70      | Medium |
/// | <= 30        | Low    |
pub const TIER_BANDS: [TierBand; 3] = [
    TierBand {
        lower: 70.0,
        upper: f64::INFINITY,
        tier: RiskTier::High,
        recommendations: &[
            "Trigger retention campaign immediately.",
            "Offer personalized interest rates or loyalty bonuses.",
            "Escalate to a relationship manager for direct outreach.",
        ],
    },
    TierBand {
        lower: 30.0,
        upper: 70.0,
        tier: RiskTier::Medium,
        recommendations: &[
            "Enroll customer in the engagement programme.",
            "Review product fit at the next account touchpoint.",
        ],
    },
    TierBand {
        lower: f64::NEG_INFINITY,
        upper: 30.0,
        tier: RiskTier::Low,
        recommendations: &[
            "Maintain standard engagement.",
            "Customer shows high stability.",
        ],
    },
];

/// Find the band containing a risk percent value.
fn band_for(risk_percent: f64) -> &'static TierBand {
    for band in &TIER_BANDS {
        if risk_percent > band.lower && risk_percent <= band.upper {
            return band;
        }
    }
    // Bands cover the whole line; unreachable for finite input
    &TIER_BANDS[TIER_BANDS.len() - 1]
}

/// Classify a probability into a display tier.
pub fn classify(probability: f64) -> RiskTier {
    band_for(probability * 100.0).tier
}

/// Build the assessment for a classifier probability.
///
/// The probability is clamped to [0, 1] before tiering so an out-of-range
/// model output can never produce an out-of-range display value.
pub fn assess(probability: f64) -> RiskAssessment {
    let probability = probability.clamp(0.0, 1.0);
    let band = band_for(probability * 100.0);
    RiskAssessment {
        probability,
        risk_tier: band.tier,
        recommendation: band.recommendations.iter().map(|s| s.to_string()).collect(),
    }
}
