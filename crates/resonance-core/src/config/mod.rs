//! Resonance configuration types.
//!
//! Configuration is a plain serde value: build it in code, or load it from a
//! JSON document. Every section exposes `validate()`; the top-level
//! [`ResonanceConfig::validate`] maps section failures to
//! [`ResonanceError::ConfigError`].
//!
//! ```
//! use resonance_core::config::ResonanceConfig;
//!
//! let config = ResonanceConfig::from_json_str(r#"{ "drift": { "decay_rate": 0.2 } }"#)
//!     .expect("valid config");
//! assert_eq!(config.drift.decay_rate, 0.2);
//! assert_eq!(config.drift.input_pull, 0.3); // unspecified fields keep defaults
//! ```

mod drift;


pub use self::drift::DriftParams;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ResonanceError, ResonanceResult};

/// Top-level configuration for an [`AffectEngine`](crate::engine::AffectEngine).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResonanceConfig {
    /// Drift integrator coefficients used by `drift()` and `observe_text()`.
    #[serde(default)]
    pub drift: DriftParams,

    /// Log every drift step at `info` instead of `debug`.
    #[serde(default)]
    pub debug: bool,
}

impl ResonanceConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset with slow, homeostatic dynamics.
    pub fn calm_preset() -> Self {
        Self {
            drift: DriftParams::calm(),
            ..Default::default()
        }
    }

    /// Preset with fast, stimulus-driven dynamics.
    pub fn reactive_preset() -> Self {
        Self {
            drift: DriftParams::reactive(),
            ..Default::default()
        }
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> ResonanceResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ResonanceResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), "Loaded resonance configuration");
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> ResonanceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration, returning an error if invalid.
    pub fn validate(&self) -> ResonanceResult<()> {
        self.drift.validate().map_err(|reason| {
            tracing::warn!(%reason, "Rejected drift configuration");
            ResonanceError::ConfigError(reason)
        })
    }
}
