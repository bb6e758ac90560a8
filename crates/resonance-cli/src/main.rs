//! Resonance CLI
//!
//! Command-line driver for the affective-resonance engine.
//!
//! # Commands
//!
//! - `analyze`: Text statistics and the stimulus a text produces
//! - `distance`: Bag-of-words cosine distance between two texts
//! - `simulate`: Feed stdin lines through a fresh engine
//! - `attractors`: List the attractor catalog, optionally probing a point
//!
//! Exit code 0 on success, 1 on error. Logs go to stderr.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Resonance - valence/arousal drift over text
#[derive(Parser)]
#[command(name = "resonance-cli")]
#[command(version)]
#[command(about = "Drive the affective-resonance engine from the command line")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show text statistics and the resulting stimulus
    Analyze(commands::analyze::AnalyzeArgs),
    /// Semantic distance between two texts (0 = identical, 1 = unrelated)
    Distance(commands::distance::DistanceArgs),
    /// Read lines from stdin and drift a fresh engine through them
    ///
    /// Each non-empty line is appraised and applied as one step:
    ///   printf 'I love this\nthis is awful\n' | resonance-cli simulate
    Simulate(commands::simulate::SimulateArgs),
    /// List the attractor catalog
    Attractors(commands::attractors::AttractorsArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Analyze(args) => commands::analyze::handle_analyze(args),
        Commands::Distance(args) => commands::distance::handle_distance(args),
        Commands::Simulate(args) => commands::simulate::handle_simulate(args),
        Commands::Attractors(args) => commands::attractors::handle_attractors(args),
    };

    std::process::exit(exit_code);
}
