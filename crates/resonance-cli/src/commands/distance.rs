//! `distance` command.

use clap::Args;
use serde::Serialize;

use resonance_core::semantic_distance;

use super::print_json;

/// Arguments for the distance command.
#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// First text
    pub a: String,

    /// Second text
    pub b: String,

    /// Output as JSON instead of a bare number
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DistanceReport<'a> {
    a: &'a str,
    b: &'a str,
    distance: f32,
}

/// Handle the distance command.
pub fn handle_distance(args: DistanceArgs) -> i32 {
    let distance = semantic_distance(&args.a, &args.b);
    tracing::debug!(distance, "Computed semantic distance");

    if args.json {
        return print_json(&DistanceReport {
            a: &args.a,
            b: &args.b,
            distance,
        });
    }

    println!("{:.6}", distance);
    0
}
