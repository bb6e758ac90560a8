//! Tests for the lexicon module.

use crate::lexicon::{ArousalComponents, Lexicon, Stimulus, WeightTable};

#[test]
fn test_weight_table_creation() {
    let table = WeightTable::new();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

#[test]
fn test_weight_table_case_insensitive() {
    let table = WeightTable::from_pairs(&[("Happy", 0.7)]);
    assert!(table.contains("happy"));
    assert_eq!(table.weight("happy"), Some(0.7));
    assert_eq!(table.weight("HAPPY"), Some(0.7));
}

#[test]
fn test_weight_table_later_pairs_overwrite() {
    let table = WeightTable::from_pairs(&[("shared", 0.3), ("SHARED", 0.9)]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.weight("shared"), Some(0.9));
}

#[test]
fn test_sum_over_counts_repeats() {
    let table = WeightTable::from_pairs(&[("rain", -0.25)]);
    let (sum, hits) = table.sum_over(&["rain", "sun", "rain"]);
    assert_eq!(hits, 2);
    assert!((sum + 0.5).abs() < 1e-6);
}

#[test]
fn test_builtin_tables_populated() {
    let lexicon = Lexicon::builtin();

    assert_eq!(lexicon.valence().weight("love"), Some(0.95));
    assert_eq!(lexicon.valence().weight("hate"), Some(-0.9));
    assert_eq!(lexicon.valence().weight("ненавижу"), Some(-0.9));
    assert_eq!(lexicon.tension().weight("emergency"), Some(0.9));
    assert_eq!(lexicon.novelty().weight("shock"), Some(0.8));
    assert_eq!(lexicon.recursion().weight("reflect"), Some(0.6));
}

#[test]
fn test_builtin_is_shared() {
    assert!(std::ptr::eq(Lexicon::builtin(), Lexicon::builtin()));
}

#[test]
fn test_word_can_live_in_several_tables() {
    let lexicon = Lexicon::builtin();
    assert!(lexicon.valence().contains("danger"));
    assert!(lexicon.tension().contains("danger"));
    assert!(lexicon.valence().contains("surprise"));
    assert!(lexicon.novelty().contains("surprise"));
}

#[test]
fn test_arousal_combined_weights() {
    let arousal = ArousalComponents {
        base: 0.1,
        tension: 0.2,
        novelty: 0.2,
        focus: 0.5,
        recursion: 0.5,
    };
    // 0.1 + 0.16 + 0.1 + 0.15 + 0.1
    assert!((arousal.combined() - 0.61).abs() < 1e-6);
}

#[test]
fn test_arousal_combined_clamped() {
    let saturated = ArousalComponents {
        base: 1.0,
        tension: 1.0,
        novelty: 1.0,
        focus: 1.0,
        recursion: 1.0,
    };
    assert_eq!(saturated.combined(), 1.0);
    assert_eq!(ArousalComponents::default().combined(), 0.0);
}

#[test]
fn test_arousal_dimension_saturates() {
    let arousal = Lexicon::builtin().arousal_components(&["urgent", "emergency"]);
    assert_eq!(arousal.tension, 1.0);
    assert_eq!(arousal.novelty, 0.0);
}

#[test]
fn test_arousal_base_from_valence_intensity() {
    let arousal = Lexicon::builtin().arousal_components(&["surprise"]);
    assert!((arousal.base - 0.5).abs() < 1e-6);
    assert!((arousal.novelty - 0.7).abs() < 1e-6);
    assert!((arousal.combined() - 0.85).abs() < 1e-6);
}

#[test]
fn test_appraise_empty_text() {
    let appraisal = Lexicon::builtin().appraise("");
    assert_eq!(appraisal.token_count, 0);
    assert_eq!(appraisal.stimulus, Stimulus::default());
    assert_eq!(appraisal.arousal, ArousalComponents::default());
}

#[test]
fn test_appraise_negative_reflective_text() {
    // tokens: i feel so lonely and empty
    let appraisal = Lexicon::builtin().appraise("I feel so lonely and empty");

    assert_eq!(appraisal.token_count, 6);
    assert!((appraisal.stimulus.valence + 0.2).abs() < 1e-5);
    assert!((appraisal.arousal.base - 0.6).abs() < 1e-5);
    assert!((appraisal.arousal.recursion - 0.4).abs() < 1e-5);
    assert!((appraisal.stimulus.arousal - 0.68).abs() < 1e-5);
}

#[test]
fn test_appraise_matches_word_entropy() {
    let text = "what a wonderful surprise, thank you";
    let appraisal = Lexicon::builtin().appraise(text);
    assert_eq!(appraisal.word_entropy, crate::text::word_entropy(text));
}

#[test]
fn test_stimulus_clamps() {
    let stimulus = Stimulus::new(-3.0, 2.0);
    assert_eq!(stimulus.valence, -1.0);
    assert_eq!(stimulus.arousal, 1.0);
}
