//! `attractors` command: list the catalog and probe the field.
//!
//! # Usage
//!
//! ```bash
//! resonance-cli attractors
//! resonance-cli attractors --valence -0.5 --arousal 0.8 --json
//! ```

use clap::Args;
use serde::Serialize;

use resonance_core::{AttractorField, EmotionalAttractor};

use super::print_json;

/// Arguments for the attractors command.
#[derive(Args, Debug)]
pub struct AttractorsArgs {
    /// Valence of the point to probe
    #[arg(long, allow_hyphen_values = true, requires = "arousal")]
    pub valence: Option<f32>,

    /// Arousal of the point to probe
    #[arg(long, requires = "valence")]
    pub arousal: Option<f32>,

    /// Output as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Field query at one point.
#[derive(Debug, Clone, Serialize)]
pub struct Probe {
    pub valence: f32,
    pub arousal: f32,
    pub nearest: String,
    pub pull: (f32, f32),
}

#[derive(Debug, Serialize)]
struct CatalogReport<'a> {
    attractors: Vec<&'a EmotionalAttractor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    probe: Option<Probe>,
}

/// Query `field` at `(valence, arousal)`.
pub fn probe(field: &AttractorField, valence: f32, arousal: f32) -> Probe {
    Probe {
        valence,
        arousal,
        nearest: field.nearest(valence, arousal).name.clone(),
        pull: field.gradient(valence, arousal),
    }
}

/// Handle the attractors command.
pub fn handle_attractors(args: AttractorsArgs) -> i32 {
    let field = AttractorField::builtin();
    let probe = match (args.valence, args.arousal) {
        (Some(v), Some(a)) => Some(probe(field, v, a)),
        _ => None,
    };

    if args.json {
        return print_json(&CatalogReport {
            attractors: field.iter().collect(),
            probe,
        });
    }

    println!(
        "{:<12} {:>8} {:>8} {:>9} {:>11}",
        "name", "valence", "arousal", "strength", "stickiness"
    );
    for attractor in field.iter() {
        println!(
            "{:<12} {:>+8.2} {:>8.2} {:>9.2} {:>11.2}",
            attractor.name,
            attractor.valence,
            attractor.arousal,
            attractor.strength,
            attractor.stickiness
        );
    }

    if let Some(probe) = probe {
        println!();
        println!("At ({:+.3}, {:.3}):", probe.valence, probe.arousal);
        println!("  nearest: {}", probe.nearest);
        println!("  pull:    ({:+.4}, {:+.4})", probe.pull.0, probe.pull.1);
    }
    0
}
