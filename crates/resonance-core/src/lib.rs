//! Affective-resonance engine.
//!
//! This crate models a single evolving emotional state in the two-dimensional
//! valence-arousal plane. The state drifts toward each incoming stimulus,
//! decays toward a baseline, and is pulled by a fixed field of named emotional
//! attractors. A small text layer reduces raw text to stimuli.
//!
//! # Modules
//!
//! - [`attractor`]: Attractor catalog, gradient and nearest-attractor queries
//! - [`drift`]: Affect state and the explicit Euler drift step
//! - [`engine`]: Thread-safe handle owning one affect stream
//! - [`text`]: Tokenizer, entropy, perplexity and semantic distance
//! - [`lexicon`]: Word weight tables and text appraisal
//! - [`config`]: Drift parameters and presets
//! - [`error`]: Error types and result aliases
//!
//! # Ranges
//!
//! - valence: `[-1, 1]`
//! - arousal: `[0, 1]`
//! - prediction: unbounded, the next expected valence
//!
//! # Example
//!
//! ```
//! use resonance_core::{AffectEngine, semantic_distance};
//!
//! let engine = AffectEngine::new();
//! let appraisal = engine.observe_text("what a wonderful surprise");
//! assert!(appraisal.stimulus.valence > 0.0);
//! assert_eq!(engine.message_count(), 1);
//!
//! assert_eq!(semantic_distance("same words", "same words"), 0.0);
//! ```

pub mod attractor;
pub mod config;
pub mod drift;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod text;

pub use config::{DriftParams, ResonanceConfig};
pub use error::{ResonanceError, ResonanceResult};

pub use attractor::{AttractorField, EmotionalAttractor};
pub use drift::{AffectState, DriftStep};
pub use engine::AffectEngine;
pub use lexicon::{Appraisal, ArousalComponents, Lexicon, Stimulus};
pub use text::{char_entropy, perplexity, semantic_distance, tokenize, word_entropy, WordEntropy};
