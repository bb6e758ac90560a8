//! Attractor field: gradient and nearest-attractor queries.

use std::collections::HashSet;
use std::sync::OnceLock;

use super::catalog::{builtin_attractors, EmotionalAttractor};
use crate::error::{ResonanceError, ResonanceResult};

/// Attractors closer than this are skipped by the gradient.
pub const SKIP_DISTANCE: f32 = 0.01;

/// Within this distance an attractor's pull is damped by its stickiness.
pub const STICKY_RADIUS: f32 = 0.2;

/// Softening term in the inverse-distance weight `strength / (d + SOFTENING)`.
pub const SOFTENING: f32 = 0.5;

static BUILTIN_FIELD: OnceLock<AttractorField> = OnceLock::new();

/// A validated, non-empty, immutable catalog of attractors.
///
/// # Example
///
/// ```
/// use resonance_core::attractor::AttractorField;
///
/// let field = AttractorField::builtin();
///
/// assert_eq!(field.nearest(-0.65, 0.85).name, "fear");
///
/// let (dv, da) = field.gradient(0.0, 0.0);
/// assert!(dv.is_finite() && da > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct AttractorField {
    attractors: Vec<EmotionalAttractor>,
}

impl AttractorField {
    /// Build a field from a catalog.
    ///
    /// # Errors
    ///
    /// - [`ResonanceError::EmptyCatalog`] if `attractors` is empty
    /// - [`ResonanceError::DuplicateAttractor`] if two attractors share a name
    /// - [`ResonanceError::InvalidParameter`] for non-finite coordinates,
    ///   negative strength, or stickiness outside `[0, 1]`
    pub fn new(attractors: Vec<EmotionalAttractor>) -> ResonanceResult<Self> {
        if attractors.is_empty() {
            return Err(ResonanceError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(attractors.len());
        for attractor in &attractors {
            if !seen.insert(attractor.name.as_str()) {
                return Err(ResonanceError::DuplicateAttractor(attractor.name.clone()));
            }
            validate_attractor(attractor)?;
        }

        Ok(Self { attractors })
    }

    /// The process-wide built-in field, built on first use.
    pub fn builtin() -> &'static AttractorField {
        BUILTIN_FIELD.get_or_init(|| Self {
            attractors: builtin_attractors(),
        })
    }

    /// Number of attractors (always at least one).
    pub fn len(&self) -> usize {
        self.attractors.len()
    }

    /// Always `false`; a field cannot be built from an empty catalog.
    pub fn is_empty(&self) -> bool {
        self.attractors.is_empty()
    }

    /// Iterate attractors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &EmotionalAttractor> {
        self.attractors.iter()
    }

    /// Look an attractor up by name.
    pub fn get(&self, name: &str) -> Option<&EmotionalAttractor> {
        self.attractors.iter().find(|a| a.name == name)
    }

    /// Weighted-average unit pull direction at `(valence, arousal)`.
    ///
    /// Each attractor farther than [`SKIP_DISTANCE`] contributes its unit
    /// direction weighted by `strength / (distance + 0.5)`, further scaled by
    /// `1 - stickiness` inside [`STICKY_RADIUS`]. Returns `(0, 0)` when every
    /// attractor was skipped.
    pub fn gradient(&self, valence: f32, arousal: f32) -> (f32, f32) {
        let mut total_dv = 0.0f32;
        let mut total_da = 0.0f32;
        let mut total_weight = 0.0f32;

        for attractor in &self.attractors {
            let dv = attractor.valence - valence;
            let da = attractor.arousal - arousal;
            let dist = (dv * dv + da * da).sqrt();

            if dist < SKIP_DISTANCE {
                continue;
            }

            let mut weight = attractor.strength / (dist + SOFTENING);
            if dist < STICKY_RADIUS {
                weight *= 1.0 - attractor.stickiness;
            }

            total_dv += (dv / dist) * weight;
            total_da += (da / dist) * weight;
            total_weight += weight;
        }

        if total_weight > 0.0 {
            (total_dv / total_weight, total_da / total_weight)
        } else {
            (0.0, 0.0)
        }
    }

    /// Attractor with minimum Euclidean distance to `(valence, arousal)`.
    ///
    /// Ties resolve to the first attractor in catalog order.
    pub fn nearest(&self, valence: f32, arousal: f32) -> &EmotionalAttractor {
        let mut nearest = &self.attractors[0];
        let mut min_dist = nearest.distance_to(valence, arousal);

        for attractor in &self.attractors[1..] {
            let dist = attractor.distance_to(valence, arousal);
            if dist < min_dist {
                min_dist = dist;
                nearest = attractor;
            }
        }

        nearest
    }
}

impl Default for AttractorField {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn validate_attractor(attractor: &EmotionalAttractor) -> ResonanceResult<()> {
    let name = &attractor.name;
    for (field, value) in [
        ("valence", attractor.valence),
        ("arousal", attractor.arousal),
        ("strength", attractor.strength),
        ("stickiness", attractor.stickiness),
    ] {
        if !value.is_finite() {
            return Err(ResonanceError::invalid_param(
                format!("attractor.{}", field),
                value,
                format!("attractor '{}' must have finite coordinates", name),
            ));
        }
    }
    if attractor.strength < 0.0 {
        return Err(ResonanceError::invalid_param(
            "attractor.strength",
            attractor.strength,
            format!("attractor '{}' must have non-negative strength", name),
        ));
    }
    if !(0.0..=1.0).contains(&attractor.stickiness) {
        return Err(ResonanceError::invalid_param(
            "attractor.stickiness",
            attractor.stickiness,
            format!("attractor '{}' stickiness must be in [0, 1]", name),
        ));
    }
    Ok(())
}
