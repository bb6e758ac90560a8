//! Affect state.

use serde::{Deserialize, Serialize};

/// Initial valence.
pub const INITIAL_VALENCE: f32 = 0.1;

/// Initial arousal.
pub const INITIAL_AROUSAL: f32 = 0.3;

/// Initial entropy. Reset does not touch entropy.
pub const INITIAL_ENTROPY: f32 = 0.5;

/// Initial prediction of the next input valence.
pub const INITIAL_PREDICTION: f32 = 0.1;

/// Position and dynamics of one affect stream.
///
/// Mutated only by [`step`](super::step), [`reset`](super::reset) and the
/// engine's entropy setter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffectState {
    /// Emotional polarity in `[-1, 1]`.
    pub valence: f32,
    /// Activation in `[0, 1]`.
    pub arousal: f32,
    /// Informational word entropy of the last observed text.
    pub entropy: f32,
    /// Expected next input valence. May transiently leave `[-1, 1]`.
    pub prediction: f32,
    /// Exponentially smoothed valence delta (unclamped).
    pub momentum: f32,
    /// Number of drift steps applied since creation or the last reset.
    pub message_count: u64,
}

impl Default for AffectState {
    fn default() -> Self {
        Self {
            valence: INITIAL_VALENCE,
            arousal: INITIAL_AROUSAL,
            entropy: INITIAL_ENTROPY,
            prediction: INITIAL_PREDICTION,
            momentum: 0.0,
            message_count: 0,
        }
    }
}

impl AffectState {
    /// Create a state at the initial values.
    pub fn new() -> Self {
        Self::default()
    }
}
