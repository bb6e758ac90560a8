//! Explicit Euler step over the affect state.

use serde::Serialize;

use super::state::{AffectState, INITIAL_AROUSAL, INITIAL_PREDICTION, INITIAL_VALENCE};
use crate::attractor::AttractorField;
use crate::config::DriftParams;

/// Weight of the carried momentum in the valence delta.
pub const MOMENTUM_WEIGHT: f32 = 0.3;

/// Weight of the input arousal in the arousal delta.
pub const INPUT_AROUSAL_WEIGHT: f32 = 0.2;

/// Fraction of the valence delta projected into the next prediction.
pub const LOOKAHEAD: f32 = 0.5;

/// Intermediate terms of one drift step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DriftStep {
    /// Prediction error: input valence minus the previous prediction.
    pub surprise: f32,
    /// Valence delta before clamping.
    pub d_valence: f32,
    /// Arousal delta before clamping.
    pub d_arousal: f32,
    /// Attractor gradient at the pre-step position.
    pub attractor_pull: (f32, f32),
}

/// Advance `state` by one step toward the stimulus `(input_valence, input_arousal)`.
///
/// The caller must hold exclusive access to `state` for the whole call.
///
/// ```text
/// surprise = input_v - prediction
/// dv = -decay·(v - base_v) + surprise·gain + (input_v - v)·pull + grad_v·gravity + momentum·0.3
/// da = -decay·(a - base_a) + |surprise|·gain + input_a·0.2 + grad_a·gravity
/// momentum' = momentum·m_decay + dv·(1 - m_decay)
/// v' = clamp(v + dv, -1, 1);  a' = clamp(a + da, 0, 1)
/// prediction' = v' + dv·0.5
/// ```
///
/// Inputs must be finite. NaN or infinite inputs are a caller contract
/// violation: they are not detected in release builds and poison every
/// subsequent step.
///
/// # Example
///
/// ```
/// use resonance_core::attractor::AttractorField;
/// use resonance_core::config::DriftParams;
/// use resonance_core::drift::{step, AffectState};
///
/// let mut state = AffectState::new();
/// let trace = step(&mut state, AttractorField::builtin(), 0.9, 0.6, &DriftParams::default());
///
/// assert!(trace.surprise > 0.0);
/// assert!(state.valence > 0.1);
/// assert_eq!(state.message_count, 1);
/// ```
pub fn step(
    state: &mut AffectState,
    field: &AttractorField,
    input_valence: f32,
    input_arousal: f32,
    params: &DriftParams,
) -> DriftStep {
    debug_assert!(
        input_valence.is_finite() && input_arousal.is_finite(),
        "drift inputs must be finite: ({}, {})",
        input_valence,
        input_arousal
    );

    let surprise = input_valence - state.prediction;
    let (attr_dv, attr_da) = field.gradient(state.valence, state.arousal);

    let d_valence = -params.decay_rate * (state.valence - params.baseline_valence)
        + surprise * params.surprise_gain
        + (input_valence - state.valence) * params.input_pull
        + attr_dv * params.attractor_gravity
        + state.momentum * MOMENTUM_WEIGHT;

    let d_arousal = -params.decay_rate * (state.arousal - params.baseline_arousal)
        + surprise.abs() * params.surprise_gain
        + input_arousal * INPUT_AROUSAL_WEIGHT
        + attr_da * params.attractor_gravity;

    // Old momentum, new delta
    state.momentum =
        state.momentum * params.momentum_decay + d_valence * (1.0 - params.momentum_decay);

    state.valence = (state.valence + d_valence).clamp(-1.0, 1.0);
    state.arousal = (state.arousal + d_arousal).clamp(0.0, 1.0);
    state.prediction = state.valence + d_valence * LOOKAHEAD;
    state.message_count += 1;

    DriftStep {
        surprise,
        d_valence,
        d_arousal,
        attractor_pull: (attr_dv, attr_da),
    }
}

/// Restore the initial valence, arousal, prediction, momentum and count.
///
/// `entropy` is left untouched.
pub fn reset(state: &mut AffectState) {
    state.valence = INITIAL_VALENCE;
    state.arousal = INITIAL_AROUSAL;
    state.prediction = INITIAL_PREDICTION;
    state.momentum = 0.0;
    state.message_count = 0;
}
