//! Shannon entropy over words and characters.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::tokenize;
use crate::lexicon::{Lexicon, WeightTable};

/// Word-level entropy of a text together with its emotional score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WordEntropy {
    /// Base-2 entropy of the token distribution, scaled by
    /// `1 + 0.2 * |emotional_score|`.
    pub entropy: f32,

    /// Sum of valence weights of lexicon hits divided by the total token
    /// count. Words outside the lexicon dilute the score.
    pub emotional_score: f32,
}

/// Word entropy and emotional score using the built-in lexicon.
///
/// # Example
///
/// ```
/// use resonance_core::text::word_entropy;
///
/// let stats = word_entropy("love love love");
/// assert_eq!(stats.entropy, 0.0);
/// assert!((stats.emotional_score - 0.95).abs() < 1e-6);
/// ```
pub fn word_entropy(text: &str) -> WordEntropy {
    word_entropy_with(text, Lexicon::builtin())
}

/// Word entropy and emotional score using a caller-supplied lexicon.
pub fn word_entropy_with(text: &str, lexicon: &Lexicon) -> WordEntropy {
    word_entropy_tokens(&tokenize(text), lexicon.valence())
}

/// Word entropy over already-tokenized text.
pub fn word_entropy_tokens<S: AsRef<str>>(tokens: &[S], valence: &WeightTable) -> WordEntropy {
    if tokens.is_empty() {
        return WordEntropy::default();
    }

    let (emotional_sum, _) = valence.sum_over(tokens);
    let emotional_score = emotional_sum / tokens.len() as f32;

    let raw = shannon_entropy(tokens.iter().map(AsRef::as_ref));
    let entropy = raw * (1.0 + emotional_score.abs() * 0.2);

    WordEntropy {
        entropy,
        emotional_score,
    }
}

/// Base-2 entropy over the code points of `text`.
///
/// # Example
///
/// ```
/// use resonance_core::text::char_entropy;
///
/// assert_eq!(char_entropy(""), 0.0);
/// assert!((char_entropy("abcd") - 2.0).abs() < 1e-6);
/// ```
pub fn char_entropy(text: &str) -> f32 {
    shannon_entropy(text.chars())
}

fn shannon_entropy<T, I>(items: I) -> f32
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut total = 0usize;
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let entropy = counts.values().fold(0.0f64, |acc, &count| {
        let p = count as f64 / total;
        acc - p * p.log2()
    });

    entropy as f32
}
