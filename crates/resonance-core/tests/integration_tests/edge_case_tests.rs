//! Edge case tests
//!
//! Boundary inputs across every entry point

use resonance_core::{
    char_entropy, perplexity, semantic_distance, tokenize, word_entropy, AffectEngine,
    AttractorField, DriftParams, EmotionalAttractor, ResonanceConfig, ResonanceError,
};

// =============================================================================
// TEXT
// =============================================================================

#[test]
fn test_punctuation_only_text() {
    let text = "?!... ,,, ---";
    assert!(tokenize(text).is_empty());
    assert_eq!(word_entropy(text).entropy, 0.0);
    assert_eq!(semantic_distance(text, text), 1.0);
    assert!(char_entropy(text) > 0.0);
}

#[test]
fn test_single_character_inputs() {
    assert_eq!(perplexity(""), 1.0);
    assert_eq!(perplexity("a"), 1.0);
    assert_eq!(char_entropy("a"), 0.0);
    assert_eq!(word_entropy("a").entropy, 0.0);
}

#[test]
fn test_very_long_text() {
    let text = "love and fear ".repeat(5_000);
    let stats = word_entropy(&text);
    assert!(stats.entropy.is_finite());
    assert!(perplexity(&text).is_finite());
    assert_eq!(semantic_distance(&text, &text), 0.0);
}

// =============================================================================
// ATTRACTORS
// =============================================================================

#[test]
fn test_gradient_at_each_builtin_attractor_is_finite() {
    let field = AttractorField::builtin();
    for attractor in field.iter() {
        let (dv, da) = field.gradient(attractor.valence, attractor.arousal);
        assert!(dv.is_finite() && da.is_finite(), "{}", attractor.name);
        assert_eq!(field.nearest(attractor.valence, attractor.arousal).name, attractor.name);
    }
}

#[test]
fn test_single_attractor_field_has_no_pull_at_its_centre() {
    let solo = EmotionalAttractor::new("solo", 0.2, 0.2, 1.0, 0.0);
    let field = AttractorField::new(vec![solo]).unwrap();
    assert_eq!(field.gradient(0.2, 0.2), (0.0, 0.0));
    assert_eq!(field.nearest(-1.0, 1.0).name, "solo");
}

#[test]
fn test_empty_catalog_is_rejected() {
    assert!(matches!(AttractorField::new(Vec::new()), Err(ResonanceError::EmptyCatalog)));
}

// =============================================================================
// ENGINE
// =============================================================================

#[test]
fn test_reset_on_fresh_engine_is_noop() {
    let engine = AffectEngine::new();
    let before = engine.snapshot();
    engine.reset();
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_zero_decay_params_are_accepted() {
    let params = DriftParams {
        decay_rate: 0.0,
        momentum_decay: 0.0,
        ..Default::default()
    };
    let engine = AffectEngine::with_field(AttractorField::default(), params).unwrap();
    for _ in 0..100 {
        engine.drift(1.0, 1.0);
    }
    assert!(engine.valence() <= 1.0);
    assert!(engine.arousal() <= 1.0);
}

#[test]
fn test_malformed_config_is_rejected() {
    let err = ResonanceConfig::from_json_str("{ drift: ").unwrap_err();
    assert!(matches!(err, ResonanceError::SerializationError(_)));

    let err = ResonanceConfig::from_json_str(r#"{"drift": {"decay_rate": -1.0}}"#).unwrap_err();
    assert!(matches!(err, ResonanceError::ConfigError(_)));
}
