//! Word weight tables.

use std::collections::HashMap;

/// A mapping from words to scalar weights.
///
/// Words are stored lowercase and matched case-insensitively.
///
/// # Example
///
/// ```
/// use resonance_core::lexicon::WeightTable;
///
/// let table = WeightTable::from_pairs(&[("Calm", 0.4), ("storm", -0.6)]);
///
/// assert_eq!(table.weight("calm"), Some(0.4));
/// assert_eq!(table.weight("STORM"), Some(-0.6));
/// assert_eq!(table.weight("breeze"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    words: HashMap<String, f32>,
}

impl WeightTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Build a table from `(word, weight)` pairs.
    ///
    /// Later pairs overwrite earlier ones with the same (lowercased) word.
    pub fn from_pairs(pairs: &[(&str, f32)]) -> Self {
        let mut table = Self::new();
        for (word, weight) in pairs {
            table.insert(word, *weight);
        }
        table
    }

    /// Insert or overwrite a word weight.
    pub fn insert(&mut self, word: &str, weight: f32) {
        self.words.insert(word.to_lowercase(), weight);
    }

    /// Get the weight of a word, if present.
    pub fn weight(&self, word: &str) -> Option<f32> {
        match self.words.get(word) {
            Some(weight) => Some(*weight),
            None => self.words.get(&word.to_lowercase()).copied(),
        }
    }

    /// Check if a word is in the table.
    pub fn contains(&self, word: &str) -> bool {
        self.weight(word).is_some()
    }

    /// Get the number of words in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of weights over the tokens found in the table, and the hit count.
    ///
    /// Tokens are expected lowercase (as produced by
    /// [`tokenize`](crate::text::tokenize)); repeated tokens count repeatedly.
    pub fn sum_over<S: AsRef<str>>(&self, tokens: &[S]) -> (f32, usize) {
        tokens
            .iter()
            .filter_map(|token| self.weight(token.as_ref()))
            .fold((0.0, 0), |(sum, hits), weight| (sum + weight, hits + 1))
    }
}
