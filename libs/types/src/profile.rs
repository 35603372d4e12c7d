//! Customer profile types
//!
//! Raw customer attributes collected per scoring request, with the
//! documented domain for every field and a defensive validation check.

use crate::errors::InputError;
use serde::{Deserialize, Serialize};

/// Customer residence market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Geography {
    France,
    Germany,
    Spain,
}

/// Customer gender as recorded in the source dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Inclusive credit score domain
pub const CREDIT_SCORE_RANGE: (u32, u32) = (300, 850);
/// Inclusive age domain
pub const AGE_RANGE: (u32, u32) = (18, 92);
/// Inclusive tenure domain (years with the bank)
pub const TENURE_RANGE: (u32, u32) = (0, 10);
/// Inclusive product count domain
pub const NUM_PRODUCTS_RANGE: (u32, u32) = (1, 4);

/// Raw customer attributes for a single scoring request.
///
/// Transient: built per request, never persisted. `estimated_salary` of
/// zero is accepted; the balance/salary ratio guards the division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub credit_score: u32,
    pub age: u32,
    pub tenure: u32,
    pub balance: f64,
    pub num_products: u32,
    pub has_credit_card: bool,
    pub is_active_member: bool,
    pub estimated_salary: f64,
    pub geography: Geography,
    pub gender: Gender,
}

impl CustomerProfile {
    /// Check every field against its documented domain.
    ///
    /// The presentation layer constrains inputs before submission; this is
    /// the defensive check at the core boundary. Returns the first failing
    /// field.
    pub fn validate(&self) -> Result<(), InputError> {
        check_range("credit_score", self.credit_score, CREDIT_SCORE_RANGE)?;
        check_range("age", self.age, AGE_RANGE)?;
        check_range("tenure", self.tenure, TENURE_RANGE)?;
        check_range("num_products", self.num_products, NUM_PRODUCTS_RANGE)?;
        check_amount("balance", self.balance)?;
        check_amount("estimated_salary", self.estimated_salary)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: u32, (lower, upper): (u32, u32)) -> Result<(), InputError> {
    if value < lower || value > upper {
        return Err(InputError::OutOfRange {
            field,
            value: value.to_string(),
            lower: lower.to_string(),
            upper: upper.to_string(),
        });
    }
    Ok(())
}

fn check_amount(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(InputError::Negative {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_valid_profile_passes() {
        assert!(make_profile().validate().is_ok());
    }

    #[test]
    fn test_credit_score_out_of_range() {
        let mut profile = make_profile();
        profile.credit_score = 299;
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { field: "credit_score", .. }));
    }

    #[test]
    fn test_age_out_of_range() {
        let mut profile = make_profile();
        profile.age = 93;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_tenure_upper_bound_inclusive() {
        let mut profile = make_profile();
        profile.tenure = 10;
        assert!(profile.validate().is_ok());
        profile.tenure = 11;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_num_products_lower_bound() {
        let mut profile = make_profile();
        profile.num_products = 0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_negative_balance_rejected() {
        let mut profile = make_profile();
        profile.balance = -1.0;
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, InputError::Negative { field: "balance", .. }));
    }

    #[test]
    fn test_zero_salary_accepted() {
        let mut profile = make_profile();
        profile.estimated_salary = 0.0;
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_nan_salary_rejected() {
        let mut profile = make_profile();
        profile.estimated_salary = f64::NAN;
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, InputError::NotFinite { field: "estimated_salary" }));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_in_domain_profiles_validate(
                credit_score in 300u32..=850,
                age in 18u32..=92,
                tenure in 0u32..=10,
                num_products in 1u32..=4,
                balance in 0.0f64..250_000.0,
                salary in 0.0f64..200_000.0,
            ) {
                let mut profile = make_profile();
                profile.credit_score = credit_score;
                profile.age = age;
                profile.tenure = tenure;
                profile.num_products = num_products;
                profile.balance = balance;
                profile.estimated_salary = salary;
                prop_assert!(profile.validate().is_ok());
            }
        }
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let profile = make_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let back: CustomerProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }
}
