//! Character-bigram perplexity.

use std::collections::HashMap;

/// Perplexity of `text` under its own character-bigram model.
///
/// Counts bigrams and unigrams over consecutive code points, averages
/// `log2(count(bigram) / count(lead))` over every position, and returns
/// `2^(-mean)`. The result is at least `1.0`; texts shorter than two code points
/// return exactly `1.0`.
///
/// # Example
///
/// ```
/// use resonance_core::text::perplexity;
///
/// assert_eq!(perplexity(""), 1.0);
/// assert_eq!(perplexity("a"), 1.0);
/// assert!(perplexity("abab") > 1.0);
/// ```
pub fn perplexity(text: &str) -> f32 {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 2 {
        return 1.0;
    }

    let mut bigrams: HashMap<(char, char), usize> = HashMap::new();
    let mut unigrams: HashMap<char, usize> = HashMap::new();

    for pair in chars.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
        *unigrams.entry(pair[0]).or_insert(0) += 1;
    }
    // The final code point is a unigram too, even though it leads no bigram.
    if let Some(&last) = chars.last() {
        *unigrams.entry(last).or_insert(0) += 1;
    }

    let mut log_prob = 0.0f64;
    let mut positions = 0usize;

    for pair in chars.windows(2) {
        let bigram_count = bigrams.get(&(pair[0], pair[1])).copied().unwrap_or(0);
        let lead_count = unigrams.get(&pair[0]).copied().unwrap_or(0);

        if bigram_count > 0 && lead_count > 0 {
            log_prob += (bigram_count as f64 / lead_count as f64).log2();
            positions += 1;
        }
    }

    if positions == 0 {
        return 1.0;
    }

    let mean_log_prob = log_prob / positions as f64;
    2f64.powf(-mean_log_prob) as f32
}
