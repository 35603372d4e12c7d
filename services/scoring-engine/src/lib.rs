//! Scoring Engine Service
//!
//! The reproducible core of the churn risk platform:
//! feature engineering, scaling, classification, tier mapping,
//! and artifact loading.
//!
//! The engine owns no I/O beyond the one-time artifact load; every
//! `evaluate` call is a pure pipeline over the loaded artifacts.

pub mod features;
pub mod scaler;
pub mod model;
pub mod artifacts;
pub mod tiers;
pub mod engine;

pub use artifacts::ArtifactBundle;
pub use engine::ChurnEngine;
