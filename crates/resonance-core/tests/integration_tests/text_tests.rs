//! Text statistics on realistic inputs

use resonance_core::{char_entropy, perplexity, semantic_distance, tokenize, word_entropy, Lexicon};

use super::helpers::TRANSCRIPT;

#[test]
fn test_tokenize_sentence() {
    assert_eq!(tokenize("Hello, World! 123"), vec!["hello", "world", "123"]);
    assert_eq!(tokenize("Я люблю тебя!"), vec!["я", "люблю", "тебя"]);
}

#[test]
fn test_word_entropy_of_neutral_sentence() {
    let stats = word_entropy("the quick brown fox jumps over the lazy dog");
    assert_eq!(stats.emotional_score, 0.0);
    assert!((stats.entropy - 2.947_703).abs() < 1e-5);
}

#[test]
fn test_emotional_score_is_diluted_by_neutral_words() {
    let dense = word_entropy("love");
    let diluted = word_entropy("love is all you need");

    assert!((dense.emotional_score - 0.95).abs() < 1e-6);
    assert!((diluted.emotional_score - 0.19).abs() < 1e-6);
}

#[test]
fn test_perplexity_of_repetitive_and_unique_text() {
    // Every bigram in a string of distinct characters is certain.
    assert!((perplexity("abcdefg") - 1.0).abs() < 1e-6);
    assert!((perplexity("hello hello hello") - 1.364_262).abs() < 1e-4);
}

#[test]
fn test_char_entropy_bounds() {
    for line in TRANSCRIPT {
        let distinct = line.chars().collect::<std::collections::HashSet<_>>().len();
        let entropy = char_entropy(line);
        assert!(entropy >= 0.0);
        assert!(entropy <= (distinct as f32).log2() + 1e-5);
    }
}

#[test]
fn test_semantic_distance_known_values() {
    let pets = semantic_distance("the cat sat on the mat", "the dog sat on the log");
    assert!((pets - 0.25).abs() < 1e-5);
    assert!((semantic_distance("I love you", "you love me") - 1.0 / 3.0).abs() < 1e-5);
    assert_eq!(semantic_distance("hello world", "hello world"), 0.0);
    assert_eq!(semantic_distance("", "anything"), 1.0);
}

#[test]
fn test_semantic_distance_ignores_case_and_punctuation() {
    assert_eq!(semantic_distance("Hello, World!", "hello world"), 0.0);
}

#[test]
fn test_appraisal_of_transcript_lines() {
    let lexicon = Lexicon::builtin();

    let warm = lexicon.appraise(TRANSCRIPT[1]);
    let hostile = lexicon.appraise(TRANSCRIPT[3]);
    let puzzled = lexicon.appraise(TRANSCRIPT[2]);

    assert!(warm.stimulus.valence > 0.0);
    assert!(hostile.stimulus.valence < 0.0);
    assert!(puzzled.arousal.novelty > 0.0);
    for appraisal in [warm, hostile, puzzled] {
        assert!((0.0..=1.0).contains(&appraisal.stimulus.arousal));
    }
}
