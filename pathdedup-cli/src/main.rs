//! Main entry point for the dedupe-path CLI.
//!
//! Reads a PATH-like environment variable, removes duplicate entries while
//! keeping first-seen order, and writes the result to a file (`path.txt` by
//! default, or the path given as the only positional argument).

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = pathdedup::init_logger(cli.verbose, cli.quiet);
    let global = GlobalOptions {
        log_level: logger.level(),
    };

    match cli.command.execute(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
