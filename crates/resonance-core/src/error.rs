//! Resonance error types.
//!
//! Runtime affect operations are total: out-of-range numbers are clamped and
//! degenerate text inputs map to fixed fallback values. Errors only arise while
//! building an engine, i.e. when loading configuration or validating an
//! attractor catalog.

use thiserror::Error;

/// Errors that can occur while configuring the affect engine.
#[derive(Debug, Error)]
pub enum ResonanceError {
    /// Configuration section failed validation
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {value}. {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Parameter value as string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Attractor catalog has no entries
    #[error("Attractor catalog must contain at least one attractor")]
    EmptyCatalog,

    /// Two attractors share a name
    #[error("Duplicate attractor name in catalog: {0}")]
    DuplicateAttractor(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for resonance operations.
pub type ResonanceResult<T> = Result<T, ResonanceError>;

impl From<serde_json::Error> for ResonanceError {
    fn from(err: serde_json::Error) -> Self {
        ResonanceError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for ResonanceError {
    fn from(err: std::io::Error) -> Self {
        ResonanceError::Io(err.to_string())
    }
}

impl ResonanceError {
    /// Create an invalid parameter error.
    pub fn invalid_param(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        ResonanceError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
