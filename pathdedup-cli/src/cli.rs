//! CLI structure and argument definitions.
//!
//! The tool has a single action, so the dedupe arguments are flattened into
//! the top-level parser next to the global flags.

use clap::Parser;

use crate::commands::DedupeCommand;

/// Write a PATH-like variable to a file with duplicate entries removed.
#[derive(Parser)]
#[command(name = "dedupe-path")]
#[command(
    version,
    about = "Remove duplicate entries from PATH and write the result to a file",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub command: DedupeCommand,
}
