//! Integration tests for the resonance engine.
//!
//! These tests exercise the public API only:
//! - Drift dynamics over long input sequences
//! - Text statistics on realistic inputs
//! - Engine handle behaviour under concurrency
//! - Boundary inputs across every entry point

mod helpers;
mod drift_tests;
mod text_tests;
mod engine_tests;
mod edge_case_tests;
