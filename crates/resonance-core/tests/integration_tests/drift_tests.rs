//! Drift dynamics over long sequences

use resonance_core::drift::{reset, step};
use resonance_core::{AffectState, AttractorField, DriftParams};

use super::helpers::{assert_in_bounds, stimulus_sequence};

// =============================================================================
// BOUNDS
// =============================================================================

#[test]
fn test_bounds_hold_for_every_preset() {
    let field = AttractorField::builtin();
    for params in [DriftParams::default(), DriftParams::calm(), DriftParams::reactive()] {
        let mut state = AffectState::new();
        for (v, a) in stimulus_sequence(2_000, 7) {
            step(&mut state, field, v, a, &params);
            assert_in_bounds(&state);
        }
        assert_eq!(state.message_count, 2_000);
    }
}

#[test]
fn test_inputs_outside_the_plane_are_still_bounded() {
    let field = AttractorField::builtin();
    let params = DriftParams::default();
    let mut state = AffectState::new();

    for i in 0..200 {
        let sign = if i % 3 == 0 { -1.0 } else { 1.0 };
        step(&mut state, field, sign * 25.0, -4.0, &params);
        assert_in_bounds(&state);
    }
}

// =============================================================================
// CONVERGENCE
// =============================================================================

#[test]
fn test_constant_input_reaches_fixed_point() {
    let field = AttractorField::builtin();
    let params = DriftParams::default();
    let mut state = AffectState::new();

    let mut deltas = Vec::new();
    for _ in 0..300 {
        let trace = step(&mut state, field, 0.1, 0.3, &params);
        deltas.push((trace.d_valence.abs(), trace.d_arousal.abs()));
    }

    let (dv, da) = deltas[deltas.len() - 1];
    assert!(dv < 1e-4 && da < 1e-4, "final deltas ({}, {})", dv, da);
    assert!(deltas[0].0 > dv);
}

#[test]
fn test_positive_and_negative_runs_are_not_mirror_images() {
    // The attractor field is asymmetric, so the two runs settle differently.
    let field = AttractorField::builtin();
    let params = DriftParams::default();

    let mut up = AffectState::new();
    let mut down = AffectState::new();
    for _ in 0..50 {
        step(&mut up, field, 0.9, 0.9, &params);
        step(&mut down, field, -0.9, 0.9, &params);
    }

    assert!(up.valence > 0.7);
    assert!(down.valence < -0.65);
    assert!((up.valence + down.valence).abs() > 1e-3);
    assert_eq!(field.nearest(up.valence, up.arousal).name, "excitement");
    assert_eq!(field.nearest(down.valence, down.arousal).name, "rage");
}

// =============================================================================
// RESET
// =============================================================================

#[test]
fn test_reset_then_replay_is_deterministic() {
    let field = AttractorField::builtin();
    let params = DriftParams::default();
    let inputs = stimulus_sequence(100, 42);

    let mut state = AffectState::new();
    for &(v, a) in &inputs {
        step(&mut state, field, v, a, &params);
    }
    let first = state;

    reset(&mut state);
    for &(v, a) in &inputs {
        step(&mut state, field, v, a, &params);
    }

    assert_eq!(state, first);
}
