//! Emotional attractors and the built-in catalog.

use serde::{Deserialize, Serialize};

/// A stable point in (valence, arousal) space that the affect state drifts toward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalAttractor {
    /// Unique name, used for lookup and reporting.
    pub name: String,
    /// Valence of the fixed point, `[-1, 1]`.
    pub valence: f32,
    /// Arousal of the fixed point, `[0, 1]`.
    pub arousal: f32,
    /// Pull magnitude scale.
    pub strength: f32,
    /// How hard the basin is to leave once inside it, `[0, 1]`.
    pub stickiness: f32,
}

impl EmotionalAttractor {
    /// Create an attractor.
    pub fn new(
        name: impl Into<String>,
        valence: f32,
        arousal: f32,
        strength: f32,
        stickiness: f32,
    ) -> Self {
        Self {
            name: name.into(),
            valence,
            arousal,
            strength,
            stickiness,
        }
    }

    /// Euclidean distance from `(valence, arousal)` to this attractor.
    #[inline]
    pub fn distance_to(&self, valence: f32, arousal: f32) -> f32 {
        let dv = self.valence - valence;
        let da = self.arousal - arousal;
        (dv * dv + da * da).sqrt()
    }
}

/// `(name, valence, arousal, strength, stickiness)`
const BUILTIN_ATTRACTORS: &[(&str, f32, f32, f32, f32)] = &[
    // Positive
    ("joy", 0.7, 0.6, 0.3, 0.3),
    ("contentment", 0.5, 0.2, 0.4, 0.5),
    ("excitement", 0.8, 0.8, 0.2, 0.2),
    ("warmth", 0.6, 0.3, 0.3, 0.4),
    // Negative
    ("sadness", -0.6, 0.2, 0.4, 0.6),
    ("fear", -0.7, 0.8, 0.3, 0.3),
    ("rage", -0.8, 0.9, 0.25, 0.2),
    ("void", -0.4, 0.1, 0.5, 0.7),
    // Neutral / flow
    ("flow", 0.1, 0.4, 0.35, 0.4),
    ("neutral", 0.0, 0.3, 0.3, 0.3),
    ("curiosity", 0.2, 0.5, 0.25, 0.35),
    ("playful", 0.5, 0.7, 0.3, 0.25),
];

/// The built-in attractor catalog, in lookup order.
pub fn builtin_attractors() -> Vec<EmotionalAttractor> {
    BUILTIN_ATTRACTORS
        .iter()
        .map(|&(name, valence, arousal, strength, stickiness)| {
            EmotionalAttractor::new(name, valence, arousal, strength, stickiness)
        })
        .collect()
}
