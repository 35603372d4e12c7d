//! Feature engineering
//!
//! Turns a raw customer profile into the named feature set the model was
//! trained on: eight raw/encoded fields, four derived interaction features,
//! and three one-hot indicators. Pure and deterministic; the only ordering
//! authority is the feature-name artifact passed in by the caller.

use types::errors::SchemaError;
use types::features::FeatureVector;
use types::profile::{CustomerProfile, Gender, Geography};

// ── Canonical feature names (the training pipeline's column names) ───────

pub const CREDIT_SCORE: &str = "CreditScore";
pub const AGE: &str = "Age";
pub const TENURE: &str = "Tenure";
pub const BALANCE: &str = "Balance";
pub const NUM_OF_PRODUCTS: &str = "NumOfProducts";
pub const HAS_CR_CARD: &str = "HasCrCard";
pub const IS_ACTIVE_MEMBER: &str = "IsActiveMember";
pub const ESTIMATED_SALARY: &str = "EstimatedSalary";
pub const BALANCE_SALARY_RATIO: &str = "Balance_Salary_Ratio";
pub const PRODUCT_DENSITY: &str = "Product_Density";
pub const ENGAGEMENT_PRODUCT_INTERACT: &str = "Engagement_Product_Interact";
pub const AGE_TENURE_INTERACT: &str = "Age_Tenure_Interact";
pub const GEOGRAPHY_GERMANY: &str = "Geography_Germany";
pub const GEOGRAPHY_SPAIN: &str = "Geography_Spain";
pub const GENDER_MALE: &str = "Gender_Male";

/// Every feature the transform can compute, in training-pipeline order.
pub const COMPUTED_FEATURES: [&str; 15] = [
    CREDIT_SCORE,
    AGE,
    TENURE,
    BALANCE,
    NUM_OF_PRODUCTS,
    HAS_CR_CARD,
    IS_ACTIVE_MEMBER,
    ESTIMATED_SALARY,
    BALANCE_SALARY_RATIO,
    PRODUCT_DENSITY,
    ENGAGEMENT_PRODUCT_INTERACT,
    AGE_TENURE_INTERACT,
    GEOGRAPHY_GERMANY,
    GEOGRAPHY_SPAIN,
    GENDER_MALE,
];

/// Compute the full named feature set for a profile.
///
/// Derived features:
/// - `Balance_Salary_Ratio = balance / salary` (0 when salary is 0)
/// - `Product_Density = num_products / (tenure + 1)` (denominator >= 1)
/// - `Engagement_Product_Interact = is_active * num_products`
/// - `Age_Tenure_Interact = age * tenure`
///
/// Geography one-hots with France as the implicit baseline; gender one-hot
/// for Male.
pub fn compute_features(profile: &CustomerProfile) -> Vec<(&'static str, f64)> {
    let active = if profile.is_active_member { 1.0 } else { 0.0 };
    let cards = if profile.has_credit_card { 1.0 } else { 0.0 };

    let balance_salary_ratio = if profile.estimated_salary > 0.0 {
        profile.balance / profile.estimated_salary
    } else {
        0.0
    };
    let product_density = f64::from(profile.num_products) / f64::from(profile.tenure + 1);
    let engagement_product = active * f64::from(profile.num_products);
    let age_tenure = f64::from(profile.age) * f64::from(profile.tenure);

    vec![
        (CREDIT_SCORE, f64::from(profile.credit_score)),
        (AGE, f64::from(profile.age)),
        (TENURE, f64::from(profile.tenure)),
        (BALANCE, profile.balance),
        (NUM_OF_PRODUCTS, f64::from(profile.num_products)),
        (HAS_CR_CARD, cards),
        (IS_ACTIVE_MEMBER, active),
        (ESTIMATED_SALARY, profile.estimated_salary),
        (BALANCE_SALARY_RATIO, balance_salary_ratio),
        (PRODUCT_DENSITY, product_density),
        (ENGAGEMENT_PRODUCT_INTERACT, engagement_product),
        (AGE_TENURE_INTERACT, age_tenure),
        (
            GEOGRAPHY_GERMANY,
            if profile.geography == Geography::Germany { 1.0 } else { 0.0 },
        ),
        (
            GEOGRAPHY_SPAIN,
            if profile.geography == Geography::Spain { 1.0 } else { 0.0 },
        ),
        (
            GENDER_MALE,
            if profile.gender == Gender::Male { 1.0 } else { 0.0 },
        ),
    ]
}

/// Build the feature vector in the exact order the artifact dictates.
///
/// Any name in `feature_order` that the transform cannot compute is a
/// schema mismatch. Set equality in the other direction (artifact omitting
/// a computed feature) is enforced once at artifact load, not per request.
pub fn build_features(
    profile: &CustomerProfile,
    feature_order: &[String],
) -> Result<FeatureVector, SchemaError> {
    let computed = compute_features(profile);

    let mut pairs = Vec::with_capacity(feature_order.len());
    for name in feature_order {
        let value = computed
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
            .ok_or_else(|| SchemaError::UnknownFeature { name: name.clone() })?;
        pairs.push((name.clone(), value));
    }

    Ok(FeatureVector::from_pairs(pairs))
}
