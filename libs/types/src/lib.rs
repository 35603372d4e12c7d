//! Types library for the churn risk scoring platform
//!
//! This library provides all core type definitions shared by the scoring
//! engine and the gateway, keeping the domain model in one place.
//!
//! # Version
//! v1.0.0
//!
//! # Modules
//! - `profile`: Raw customer attributes and input validation
//! - `features`: Ordered named feature vector
//! - `assessment`: Risk tier and assessment output
//! - `errors`: Error taxonomy

// Public modules
pub mod profile;
pub mod features;
pub mod assessment;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::profile::*;
    pub use crate::features::*;
    pub use crate::assessment::*;
    pub use crate::errors::*;
}
