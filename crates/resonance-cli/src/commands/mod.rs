//! CLI command handlers
//!
//! Every handler returns the process exit code: 0 on success, 1 on error.

pub mod analyze;
pub mod attractors;
pub mod distance;
pub mod simulate;

use serde::Serialize;
use tracing::error;

/// Print `value` as pretty JSON on stdout.
///
/// Returns the exit code for the caller to propagate.
pub(crate) fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            error!("Failed to serialize output: {}", e);
            eprintln!("Error: {}", e);
            1
        }
    }
}
