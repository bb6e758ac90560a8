//! Drift integrator parameters.
//!
//! Coefficients of the explicit Euler step that moves the affect state toward
//! its baseline, its attractors and the incoming stimulus.

use serde::{Deserialize, Serialize};

/// Coefficients for one drift step.
///
/// Pure value type: a step reads it and never mutates it.
///
/// # Example
///
/// ```
/// use resonance_core::config::DriftParams;
///
/// let params = DriftParams::default();
/// assert_eq!(params.decay_rate, 0.15);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftParams {
    /// Pull back toward the baseline per step.
    /// Range: `[0.0, 1.0]`
    pub decay_rate: f32,

    /// Gain applied to prediction error (surprise).
    /// Range: `[0.0, 2.0]`
    pub surprise_gain: f32,

    /// Direct tracking of the input valence.
    /// Range: `[0.0, 1.0]`
    pub input_pull: f32,

    /// Scale of the attractor gradient.
    /// Range: `[0.0, 1.0]`
    pub attractor_gravity: f32,

    /// Retention of the previous momentum when smoothing.
    /// Range: `[0.0, 1.0]`
    pub momentum_decay: f32,

    /// Valence the state relaxes toward.
    /// Range: `[-1.0, 1.0]`
    pub baseline_valence: f32,

    /// Arousal the state relaxes toward.
    /// Range: `[0.0, 1.0]`
    pub baseline_arousal: f32,
}

impl Default for DriftParams {
    fn default() -> Self {
        Self {
            decay_rate: 0.15,
            surprise_gain: 0.5,
            input_pull: 0.3,
            attractor_gravity: 0.1,
            momentum_decay: 0.3,
            baseline_valence: 0.1,
            baseline_arousal: 0.3,
        }
    }
}

impl DriftParams {
    /// Slow, homeostatic drift: strong decay, little surprise response.
    pub fn calm() -> Self {
        Self {
            decay_rate: 0.3,
            surprise_gain: 0.2,
            input_pull: 0.15,
            momentum_decay: 0.5,
            ..Default::default()
        }
    }

    /// Fast, reactive drift: weak decay, strong surprise and input tracking.
    pub fn reactive() -> Self {
        Self {
            decay_rate: 0.05,
            surprise_gain: 0.8,
            input_pull: 0.5,
            attractor_gravity: 0.05,
            momentum_decay: 0.2,
            ..Default::default()
        }
    }

    /// Validate the drift parameters.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("decay_rate", self.decay_rate, 0.0, 1.0),
            ("surprise_gain", self.surprise_gain, 0.0, 2.0),
            ("input_pull", self.input_pull, 0.0, 1.0),
            ("attractor_gravity", self.attractor_gravity, 0.0, 1.0),
            ("momentum_decay", self.momentum_decay, 0.0, 1.0),
            ("baseline_valence", self.baseline_valence, -1.0, 1.0),
            ("baseline_arousal", self.baseline_arousal, 0.0, 1.0),
        ];

        for (name, value, min, max) in fields {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
            if !(min..=max).contains(&value) {
                return Err(format!(
                    "{} must be in [{}, {}], got {}",
                    name, min, max, value
                ));
            }
        }
        Ok(())
    }
}
