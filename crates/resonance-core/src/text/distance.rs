//! Bag-of-words cosine distance between texts.

use std::collections::HashMap;

use super::tokenize;

/// Cosine distance between the term-frequency vectors of two texts.
///
/// Returns `1 - cosine_similarity` in `[0, 1]`. Returns `1.0` (maximum
/// distance) when either text has no tokens or a zero-norm vector.
///
/// # Example
///
/// ```
/// use resonance_core::text::semantic_distance;
///
/// assert_eq!(semantic_distance("hello world", "hello world"), 0.0);
/// assert_eq!(semantic_distance("", "anything"), 1.0);
/// assert_eq!(semantic_distance("red fox", "blue whale"), 1.0);
/// ```
pub fn semantic_distance(text_a: &str, text_b: &str) -> f32 {
    let tokens_a = tokenize(text_a);
    let tokens_b = tokenize(text_b);

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 1.0;
    }

    // Term frequencies over the union vocabulary: word -> (count in a, count in b)
    let mut vocabulary: HashMap<&str, (f64, f64)> = HashMap::new();
    for word in &tokens_a {
        vocabulary.entry(word.as_str()).or_insert((0.0, 0.0)).0 += 1.0;
    }
    for word in &tokens_b {
        vocabulary.entry(word.as_str()).or_insert((0.0, 0.0)).1 += 1.0;
    }

    let (dot, norm_a, norm_b) = vocabulary.values().fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(dot, na, nb), &(a, b)| (dot + a * b, na + a * a, nb + b * b),
    );

    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }

    let similarity = dot / (norm_a * norm_b).sqrt();
    let distance = (1.0 - similarity) as f32;

    if distance.is_finite() {
        distance.clamp(0.0, 1.0)
    } else {
        1.0
    }
}
