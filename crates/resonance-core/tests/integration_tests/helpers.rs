//! Helper functions: deterministic input generation

use resonance_core::AffectState;

/// Deterministic stimulus sequence covering the whole input square.
pub fn stimulus_sequence(len: usize, seed: u64) -> Vec<(f32, f32)> {
    (0..len)
        .map(|i| {
            let x = (i as f64 + seed as f64) * 0.37;
            let valence = x.sin() as f32;
            let arousal = ((x * 1.3).cos() + 1.0) as f32 / 2.0;
            (valence, arousal)
        })
        .collect()
}

/// Assert the state lies inside the valence-arousal plane.
pub fn assert_in_bounds(state: &AffectState) {
    assert!(
        (-1.0..=1.0).contains(&state.valence),
        "valence out of range: {}",
        state.valence
    );
    assert!(
        (0.0..=1.0).contains(&state.arousal),
        "arousal out of range: {}",
        state.arousal
    );
    assert!(state.prediction.is_finite());
    assert!(state.momentum.is_finite());
}

/// A short conversation with mixed tone.
pub const TRANSCRIPT: &[&str] = &[
    "hello there",
    "I love this, it is wonderful",
    "wait, what? that is strange",
    "this is awful and I hate it",
    "why why why",
    "ok, thank you, that was beautiful",
];
