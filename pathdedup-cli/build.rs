//! Build script for pathdedup-cli.
//!
//! Generates the `dedupe-path.1` man page into OUT_DIR with clap_mangen.
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep synchronized with src/cli.rs and src/commands/dedupe.rs.
fn build_cli() -> Command {
    Command::new("dedupe-path")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Remove duplicate entries from PATH and write the result to a file")
        .long_about(
            "Reads a PATH-like environment variable, strips trailing '/' and '\\' from each \
             entry, keeps only the first occurrence of every entry, and writes the result \
             to a file with no trailing newline.",
        )
        .arg(
            Arg::new("output-path")
                .value_name("OUTPUT_PATH")
                .help("File to write the result to (default: path.txt)"),
        )
        .arg(
            Arg::new("variable")
                .long("variable")
                .value_name("NAME")
                .help("Environment variable to deduplicate (default: PATH)"),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .value_name("CHAR")
                .help("Entry delimiter (default: ';' on Windows, ':' elsewhere)"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the result to stdout instead of writing a file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .value_name("FORMAT")
                .value_parser(["human", "json"])
                .help("Print a summary of the run"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("dedupe-path.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
