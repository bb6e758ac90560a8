//! Drift integrator.
//!
//! The only mutating operation over [`AffectState`]: one explicit Euler step
//! per incoming stimulus, blending
//!
//! - decay toward a baseline (homeostasis),
//! - prediction error (surprise) from the previous step's look-ahead,
//! - direct pull toward the input valence,
//! - the attractor field gradient,
//! - and momentum carried from earlier steps.
//!
//! These functions take `&mut AffectState` and do no locking of their own;
//! [`AffectEngine`](crate::engine::AffectEngine) serializes them behind one
//! exclusive lock.

mod integrator;
mod state;


pub use integrator::{reset, step, DriftStep, INPUT_AROUSAL_WEIGHT, LOOKAHEAD, MOMENTUM_WEIGHT};
pub use state::{AffectState, INITIAL_AROUSAL, INITIAL_ENTROPY, INITIAL_PREDICTION, INITIAL_VALENCE};
