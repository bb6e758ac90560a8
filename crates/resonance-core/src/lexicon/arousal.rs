//! Arousal decomposition and text appraisal results.

use serde::{Deserialize, Serialize};

use crate::text::WordEntropy;

/// Arousal split into independent dimensions, each in `[0, 1]`.
///
/// # Example
///
/// ```
/// use resonance_core::lexicon::ArousalComponents;
///
/// let arousal = ArousalComponents {
///     tension: 0.5,
///     novelty: 0.4,
///     ..Default::default()
/// };
/// // 0.5 * 0.8 + 0.4 * 0.5
/// assert!((arousal.combined() - 0.6).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ArousalComponents {
    /// Emotional intensity of the valence words themselves.
    pub base: f32,
    /// Conflict, urgency, pressure.
    pub tension: f32,
    /// Surprise, unfamiliarity.
    pub novelty: f32,
    /// Concentration, precision. No built-in table feeds it; hosts may set it.
    pub focus: f32,
    /// Self-reference, meta-cognition.
    pub recursion: f32,
}

impl ArousalComponents {
    /// Weighted combination of all dimensions, clamped to `[0, 1]`.
    #[inline]
    pub fn combined(&self) -> f32 {
        let combined = self.base * 1.0
            + self.tension * 0.8
            + self.novelty * 0.5
            + self.focus * 0.3
            + self.recursion * 0.2;
        combined.clamp(0.0, 1.0)
    }
}

/// A pre-scored input for one drift step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stimulus {
    /// Input valence in `[-1, 1]`.
    pub valence: f32,
    /// Input arousal in `[0, 1]`.
    pub arousal: f32,
}

impl Stimulus {
    /// Create a stimulus, clamping both coordinates into range.
    pub fn new(valence: f32, arousal: f32) -> Self {
        Self {
            valence: valence.clamp(-1.0, 1.0),
            arousal: arousal.clamp(0.0, 1.0),
        }
    }
}

/// Everything the lexicon derives from one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Appraisal {
    /// Stimulus to feed the drift integrator.
    pub stimulus: Stimulus,
    /// Word-level entropy and diluted emotional score.
    pub word_entropy: WordEntropy,
    /// Arousal dimensions behind `stimulus.arousal`.
    pub arousal: ArousalComponents,
    /// Number of tokens in the text.
    pub token_count: usize,
}
