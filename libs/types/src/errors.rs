//! Error types for the scoring platform
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

/// Top-level scoring error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),
}

/// Invalid customer input
///
/// Recoverable: the presentation layer can re-prompt with corrected values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Field {field} out of range: {value} not in [{lower}, {upper}]")]
    OutOfRange {
        field: &'static str,
        value: String,
        lower: String,
        upper: String,
    },

    #[error("Field {field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: String },

    #[error("Field {field} is not a finite number")]
    NotFinite { field: &'static str },
}

/// Feature schema contract violation
///
/// The feature-name artifact and the computable feature set must match
/// exactly. Fatal at load time, not recoverable per request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Artifact orders unknown feature: {name}")]
    UnknownFeature { name: String },

    #[error("Artifact omits computed feature: {name}")]
    MissingFeature { name: String },

    #[error("Dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Malformed model: {detail}")]
    MalformedModel { detail: String },
}

/// Artifact load failure
///
/// Missing or corrupt classifier, scaler, or feature list at startup.
/// Fatal: the process must not proceed to serve requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArtifactError {
    #[error("Artifact not found: {path}")]
    Missing { path: String },

    #[error("Failed to read artifact {path}: {detail}")]
    Io { path: String, detail: String },

    #[error("Failed to parse artifact {path}: {detail}")]
    Parse { path: String, detail: String },
}
