//! Engine handle: text-driven sessions and concurrency

use std::sync::Arc;
use std::thread;

use resonance_core::{AffectEngine, ResonanceConfig};

use super::helpers::{assert_in_bounds, stimulus_sequence, TRANSCRIPT};

#[test]
fn test_transcript_session() {
    let engine = AffectEngine::new();

    for (i, line) in TRANSCRIPT.iter().enumerate() {
        let appraisal = engine.observe_text(line);
        let state = engine.snapshot();

        assert_eq!(state.message_count, i as u64 + 1);
        assert_eq!(state.entropy, appraisal.word_entropy.entropy);
        assert_in_bounds(&state);
    }
}

#[test]
fn test_hostile_lines_pull_valence_down() {
    let engine = AffectEngine::new();
    for _ in 0..10 {
        engine.observe_text("I hate this, it is awful and terrible");
    }
    assert!(engine.valence() < 0.0);
}

#[test]
fn test_independent_engines_do_not_interfere() {
    let calm = AffectEngine::with_config(ResonanceConfig::calm_preset()).unwrap();
    let reactive = AffectEngine::with_config(ResonanceConfig::reactive_preset()).unwrap();

    for (v, a) in stimulus_sequence(20, 3) {
        reactive.drift(v, a);
    }

    assert_eq!(calm.message_count(), 0);
    assert_eq!(reactive.message_count(), 20);
    assert_eq!(calm.valence(), 0.1);
}

#[test]
fn test_concurrent_observers_and_readers() {
    const WRITERS: usize = 4;
    const LINES: usize = 100;

    let engine = Arc::new(AffectEngine::new());

    let mut handles = Vec::new();
    for w in 0..WRITERS {
        let engine = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            for i in 0..LINES {
                engine.observe_text(TRANSCRIPT[(w + i) % TRANSCRIPT.len()]);
            }
        }));
    }
    for _ in 0..2 {
        let engine = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            for _ in 0..LINES {
                assert_in_bounds(&engine.snapshot());
                let _ = engine.current_mood();
            }
        }));
    }

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert_eq!(engine.message_count(), (WRITERS * LINES) as u64);
}

#[test]
fn test_config_file_round_trip_into_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resonance.json");
    std::fs::write(&path, ResonanceConfig::reactive_preset().to_json().unwrap()).unwrap();

    let config = ResonanceConfig::from_file(&path).unwrap();
    let engine = AffectEngine::with_config(config).unwrap();

    assert_eq!(*engine.params(), ResonanceConfig::reactive_preset().drift);
}
