//! Lexicon and word scorers.
//!
//! Static word → weight tables for emotional valence and for three arousal
//! dimensions (tension, novelty, recursion), and the scorers that reduce a text
//! to a [`Stimulus`] for the drift integrator.
//!
//! # Example
//!
//! ```
//! use resonance_core::lexicon::Lexicon;
//!
//! let appraisal = Lexicon::builtin().appraise("I love this, but we must stop now!");
//!
//! assert!(appraisal.stimulus.valence > 0.0);
//! assert!(appraisal.arousal.tension > 0.0);
//! ```

mod arousal;
mod default_words;
mod table;

#[cfg(test)]
mod tests;

pub use arousal::{Appraisal, ArousalComponents, Stimulus};
pub use table::WeightTable;

use std::sync::OnceLock;

use crate::text::{tokenize, word_entropy_tokens};

static BUILTIN_LEXICON: OnceLock<Lexicon> = OnceLock::new();

/// The four word tables used for appraisal.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    valence: WeightTable,
    tension: WeightTable,
    novelty: WeightTable,
    recursion: WeightTable,
}

impl Lexicon {
    /// Create a lexicon from explicit tables.
    pub fn new(
        valence: WeightTable,
        tension: WeightTable,
        novelty: WeightTable,
        recursion: WeightTable,
    ) -> Self {
        Self {
            valence,
            tension,
            novelty,
            recursion,
        }
    }

    /// Build a fresh copy of the built-in word lists.
    pub fn with_builtin_words() -> Self {
        Self::new(
            WeightTable::from_pairs(default_words::VALENCE_WORDS),
            WeightTable::from_pairs(default_words::TENSION_WORDS),
            WeightTable::from_pairs(default_words::NOVELTY_WORDS),
            WeightTable::from_pairs(default_words::RECURSION_WORDS),
        )
    }

    /// Process-wide built-in lexicon, built on first use.
    pub fn builtin() -> &'static Lexicon {
        BUILTIN_LEXICON.get_or_init(Self::with_builtin_words)
    }

    /// Emotional valence table.
    pub fn valence(&self) -> &WeightTable {
        &self.valence
    }

    /// Tension table.
    pub fn tension(&self) -> &WeightTable {
        &self.tension
    }

    /// Novelty table.
    pub fn novelty(&self) -> &WeightTable {
        &self.novelty
    }

    /// Recursion table.
    pub fn recursion(&self) -> &WeightTable {
        &self.recursion
    }

    /// Score the arousal dimensions of already-tokenized text.
    ///
    /// Each dimension is the sum of its table hits, clamped to `[0, 1]`.
    /// `base` is the mean absolute weight of the valence hits.
    pub fn arousal_components<S: AsRef<str>>(&self, tokens: &[S]) -> ArousalComponents {
        let dimension = |table: &WeightTable| table.sum_over(tokens).0.clamp(0.0, 1.0);

        let (intensity, hits) = tokens
            .iter()
            .filter_map(|token| self.valence.weight(token.as_ref()))
            .fold((0.0f32, 0usize), |(sum, n), w| (sum + w.abs(), n + 1));
        let base = if hits > 0 {
            (intensity / hits as f32).clamp(0.0, 1.0)
        } else {
            0.0
        };

        ArousalComponents {
            base,
            tension: dimension(&self.tension),
            novelty: dimension(&self.novelty),
            focus: 0.0,
            recursion: dimension(&self.recursion),
        }
    }

    /// Reduce a text to a stimulus plus the statistics behind it.
    pub fn appraise(&self, text: &str) -> Appraisal {
        let tokens = tokenize(text);
        let word_entropy = word_entropy_tokens(&tokens, &self.valence);
        let arousal = self.arousal_components(&tokens);

        Appraisal {
            stimulus: Stimulus::new(word_entropy.emotional_score, arousal.combined()),
            word_entropy,
            arousal,
            token_count: tokens.len(),
        }
    }
}
