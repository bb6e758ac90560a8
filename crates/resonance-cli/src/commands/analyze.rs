//! `analyze` command: text statistics for a single text.
//!
//! # Usage
//!
//! ```bash
//! resonance-cli analyze "I love this strange new world"
//! resonance-cli analyze "why why why" --json
//! ```

use clap::Args;
use serde::Serialize;
use tracing::info;

use resonance_core::{
    char_entropy, perplexity, ArousalComponents, AttractorField, Lexicon, Stimulus,
};

use super::print_json;

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text to analyze
    pub text: String,

    /// Output as JSON instead of human-readable
    #[arg(long)]
    pub json: bool,
}

/// Everything `analyze` reports about one text.
#[derive(Debug, Clone, Serialize)]
pub struct TextReport {
    pub tokens: Vec<String>,
    pub word_entropy: f32,
    pub emotional_score: f32,
    pub char_entropy: f32,
    pub perplexity: f32,
    pub arousal: ArousalComponents,
    pub stimulus: Stimulus,
    /// Attractor nearest to the stimulus point.
    pub nearest_attractor: String,
}

/// Compute the report for `text` with the built-in lexicon and attractors.
pub fn build_report(text: &str) -> TextReport {
    let appraisal = Lexicon::builtin().appraise(text);
    let stimulus = appraisal.stimulus;
    let nearest = AttractorField::builtin().nearest(stimulus.valence, stimulus.arousal);

    TextReport {
        tokens: resonance_core::tokenize(text),
        word_entropy: appraisal.word_entropy.entropy,
        emotional_score: appraisal.word_entropy.emotional_score,
        char_entropy: char_entropy(text),
        perplexity: perplexity(text),
        arousal: appraisal.arousal,
        stimulus,
        nearest_attractor: nearest.name.clone(),
    }
}

/// Handle the analyze command.
pub fn handle_analyze(args: AnalyzeArgs) -> i32 {
    let report = build_report(&args.text);
    info!(tokens = report.tokens.len(), "Analyzed text");

    if args.json {
        return print_json(&report);
    }

    print_report(&report);
    0
}

fn print_report(report: &TextReport) {
    println!("Text Analysis");
    println!("=============\n");
    println!("Tokens ({}): {}", report.tokens.len(), report.tokens.join(" "));
    println!("Word entropy:    {:.4}", report.word_entropy);
    println!("Emotional score: {:.4}", report.emotional_score);
    println!("Char entropy:    {:.4}", report.char_entropy);
    println!("Perplexity:      {:.4}", report.perplexity);
    println!();
    println!("Arousal:");
    println!("  base:      {:.3}", report.arousal.base);
    println!("  tension:   {:.3}", report.arousal.tension);
    println!("  novelty:   {:.3}", report.arousal.novelty);
    println!("  recursion: {:.3}", report.arousal.recursion);
    println!("  combined:  {:.3}", report.arousal.combined());
    println!();
    println!(
        "Stimulus: valence {:+.3}, arousal {:.3} (nearest: {})",
        report.stimulus.valence, report.stimulus.arousal, report.nearest_attractor
    );
}
