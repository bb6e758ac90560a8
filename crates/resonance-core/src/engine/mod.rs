//! Affect engine: one serialized affect stream.
//!
//! [`AffectEngine`] owns an [`AffectState`] behind a single exclusive lock,
//! together with the attractor field and drift parameters its steps use. Every
//! read and every read-modify-write of the state goes through that lock, so
//! concurrent callers observe a total order of steps and never a partial update.
//! Attractor and text queries take no lock.
//!
//! Hosts that need one affect stream per process construct exactly one engine;
//! hosts that need more construct more. Engines share nothing.
//!
//! # Example
//!
//! ```
//! use resonance_core::engine::AffectEngine;
//!
//! let engine = AffectEngine::new();
//! engine.drift(0.8, 0.6);
//! assert!(engine.valence() > 0.1);
//!
//! engine.reset();
//! assert_eq!((engine.valence(), engine.arousal()), (0.1, 0.3));
//! ```


use parking_lot::Mutex;

use crate::attractor::AttractorField;
use crate::config::{DriftParams, ResonanceConfig};
use crate::drift::{self, AffectState, DriftStep};
use crate::error::{ResonanceError, ResonanceResult};
use crate::lexicon::{Appraisal, Lexicon};

/// Thread-safe handle to one affect stream.
#[derive(Debug)]
pub struct AffectEngine {
    state: Mutex<AffectState>,
    field: AttractorField,
    params: DriftParams,
    debug: bool,
}

impl AffectEngine {
    /// Create an engine with the built-in attractors and default parameters.
    pub fn new() -> Self {
        Self::from_parts(AttractorField::default(), DriftParams::default(), false)
    }

    /// Create an engine from a validated configuration.
    pub fn with_config(config: ResonanceConfig) -> ResonanceResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(AttractorField::default(), config.drift, config.debug))
    }

    /// Create an engine with a custom attractor field.
    pub fn with_field(field: AttractorField, params: DriftParams) -> ResonanceResult<Self> {
        params.validate().map_err(ResonanceError::ConfigError)?;
        Ok(Self::from_parts(field, params, false))
    }

    fn from_parts(field: AttractorField, params: DriftParams, debug: bool) -> Self {
        tracing::info!(
            attractors = field.len(),
            decay_rate = params.decay_rate,
            surprise_gain = params.surprise_gain,
            "Created affect engine"
        );
        Self {
            state: Mutex::new(AffectState::default()),
            field,
            params,
            debug,
        }
    }

    /// The attractor field used by this engine.
    pub fn field(&self) -> &AttractorField {
        &self.field
    }

    /// The default drift parameters used by [`drift`](Self::drift).
    pub fn params(&self) -> &DriftParams {
        &self.params
    }

    /// Current valence.
    pub fn valence(&self) -> f32 {
        self.state.lock().valence
    }

    /// Current arousal.
    pub fn arousal(&self) -> f32 {
        self.state.lock().arousal
    }

    /// Number of drift steps since creation or the last reset.
    pub fn message_count(&self) -> u64 {
        self.state.lock().message_count
    }

    /// Consistent copy of the whole state.
    pub fn snapshot(&self) -> AffectState {
        *self.state.lock()
    }

    /// Apply one step with the engine's parameters.
    ///
    /// Inputs must be finite; see [`drift::step`].
    pub fn drift(&self, input_valence: f32, input_arousal: f32) -> DriftStep {
        self.drift_with(input_valence, input_arousal, &self.params)
    }

    /// Apply one step with caller-supplied parameters.
    pub fn drift_with(
        &self,
        input_valence: f32,
        input_arousal: f32,
        params: &DriftParams,
    ) -> DriftStep {
        let mut state = self.state.lock();
        let trace = drift::step(&mut state, &self.field, input_valence, input_arousal, params);
        self.log_step(&state, &trace);
        trace
    }

    /// Appraise `text`, record its word entropy, and drift toward it.
    ///
    /// Appraisal runs before the lock is taken; the entropy write and the
    /// step are one critical section.
    pub fn observe_text(&self, text: &str) -> Appraisal {
        let appraisal = Lexicon::builtin().appraise(text);
        let stimulus = appraisal.stimulus;

        let mut state = self.state.lock();
        state.entropy = appraisal.word_entropy.entropy;
        let trace = drift::step(
            &mut state,
            &self.field,
            stimulus.valence,
            stimulus.arousal,
            &self.params,
        );
        self.log_step(&state, &trace);

        appraisal
    }

    /// Overwrite the informational entropy field.
    pub fn set_entropy(&self, entropy: f32) {
        self.state.lock().entropy = entropy;
    }

    /// Current informational entropy.
    pub fn entropy(&self) -> f32 {
        self.state.lock().entropy
    }

    /// Restore the initial state. Entropy is kept.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        drift::reset(&mut state);
        tracing::debug!("Affect state reset to defaults");
    }

    /// Name of the attractor nearest to `(valence, arousal)`.
    pub fn nearest_attractor(&self, valence: f32, arousal: f32) -> &str {
        &self.field.nearest(valence, arousal).name
    }

    /// Name of the attractor nearest to the current state.
    pub fn current_mood(&self) -> &str {
        let (valence, arousal) = {
            let state = self.state.lock();
            (state.valence, state.arousal)
        };
        self.nearest_attractor(valence, arousal)
    }

    /// Attractor gradient at `(valence, arousal)`.
    pub fn attractor_pull(&self, valence: f32, arousal: f32) -> (f32, f32) {
        self.field.gradient(valence, arousal)
    }

    fn log_step(&self, state: &AffectState, trace: &DriftStep) {
        if self.debug {
            tracing::info!(
                valence = state.valence,
                arousal = state.arousal,
                surprise = trace.surprise,
                momentum = state.momentum,
                count = state.message_count,
                "Affect drift step"
            );
        } else {
            tracing::debug!(
                valence = state.valence,
                arousal = state.arousal,
                surprise = trace.surprise,
                momentum = state.momentum,
                count = state.message_count,
                "Affect drift step"
            );
        }
    }
}

impl Default for AffectEngine {
    fn default() -> Self {
        Self::new()
    }
}
