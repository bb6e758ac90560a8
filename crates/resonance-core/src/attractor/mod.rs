//! Attractor field over (valence, arousal) space.
//!
//! A fixed catalog of named stable moods. The field exposes a restoring
//! gradient that the drift integrator scales by `attractor_gravity`, and a
//! nearest-attractor query used to name the current mood.
//!
//! Catalogs are validated once at construction; an empty catalog is a
//! configuration error, so [`AttractorField::nearest`] always has an answer.

mod catalog;
mod field;


pub use catalog::{builtin_attractors, EmotionalAttractor};
pub use field::{AttractorField, SKIP_DISTANCE, SOFTENING, STICKY_RADIUS};
