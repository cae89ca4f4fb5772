//! Deduplication runs using the plan-execute pattern.
//!
//! Planning computes the deduplicated string and its report from an
//! explicit source string; execution writes it to an explicit path. Only
//! [`plan_run`] and [`run`] touch the process environment.
//!
//! # Examples
//!
//! ```no_run
//! use pathdedup::config::ConfigBuilder;
//! use pathdedup::operations::run;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let report = run(&config).unwrap();
//! println!("removed {} duplicate entries", report.removed_entries);
//! ```

pub mod plan;

use std::path::Path;

pub use plan::{DedupePlan, DedupeReport, WINDOWS_PATH_LIMIT};

use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::source::read_variable;

/// Deduplicate `source` and write the result to `output_path`.
///
/// # Errors
///
/// Returns an error if the output file cannot be written.
pub fn dedupe_to_file(source: &str, delimiter: char, output_path: &Path) -> Result<DedupeReport> {
    DedupePlan::build(source, delimiter).execute(output_path)
}

/// Read the configured variable and plan a run without writing anything.
///
/// # Errors
///
/// Returns an error if the variable is unset, empty, or not Unicode.
pub fn plan_run(config: &ResolvedConfig) -> Result<DedupePlan> {
    let source = read_variable(&config.variable)?;
    let plan = DedupePlan::build(&source, config.delimiter);

    let report = plan.report();
    log::debug!(
        "{}: {} entries, {} unique, {} removed",
        config.variable,
        report.input_entries,
        report.unique_entries,
        report.removed_entries
    );
    Ok(plan)
}

/// Read the configured variable, deduplicate it, and write the result to the
/// configured output path.
///
/// # Errors
///
/// Returns an error if the variable cannot be read or the output file
/// cannot be written.
pub fn run(config: &ResolvedConfig) -> Result<DedupeReport> {
    plan_run(config)?.execute(&config.output_path)
}
