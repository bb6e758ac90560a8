//! `simulate` command: drift a fresh engine through stdin.
//!
//! # Usage
//!
//! ```bash
//! printf 'hello\nI hate this\nwhy why why\n' | resonance-cli simulate
//! resonance-cli simulate --config calm.json --json < transcript.txt
//! ```

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::{error, info};

use resonance_core::{AffectEngine, ResonanceConfig, ResonanceResult, Stimulus};

use super::print_json;

/// Arguments for the simulate command.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// JSON configuration file with drift parameters
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output as JSON instead of one line per step
    #[arg(long)]
    pub json: bool,
}

/// State after one observed line.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationStep {
    pub step: u64,
    pub text: String,
    pub stimulus: Stimulus,
    pub valence: f32,
    pub arousal: f32,
    pub entropy: f32,
    pub mood: String,
}

/// Observe every non-empty line of `reader` on `engine`.
pub fn run_simulation<R: BufRead>(
    engine: &AffectEngine,
    reader: R,
) -> ResonanceResult<Vec<SimulationStep>> {
    let mut steps = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let appraisal = engine.observe_text(text);
        let state = engine.snapshot();
        steps.push(SimulationStep {
            step: state.message_count,
            text: text.to_string(),
            stimulus: appraisal.stimulus,
            valence: state.valence,
            arousal: state.arousal,
            entropy: state.entropy,
            mood: engine.nearest_attractor(state.valence, state.arousal).to_string(),
        });
    }

    Ok(steps)
}

fn load_engine(config: Option<&PathBuf>) -> ResonanceResult<AffectEngine> {
    match config {
        Some(path) => AffectEngine::with_config(ResonanceConfig::from_file(path)?),
        None => Ok(AffectEngine::new()),
    }
}

/// Handle the simulate command.
pub fn handle_simulate(args: SimulateArgs) -> i32 {
    let engine = match load_engine(args.config.as_ref()) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let stdin = io::stdin();
    let steps = match run_simulation(&engine, stdin.lock()) {
        Ok(steps) => steps,
        Err(e) => {
            error!("Failed to read input: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    info!(steps = steps.len(), "Simulation finished");

    if args.json {
        return print_json(&steps);
    }

    for step in &steps {
        println!(
            "{:>4}  v={:+.3} a={:.3}  {:<12} {}",
            step.step, step.valence, step.arousal, step.mood, step.text
        );
    }
    if steps.is_empty() {
        println!("No input lines.");
    }
    0
}
