//! Utility functions for CLI operations.
//!
//! Shared options, configuration loading, and report formatting.

use std::path::Path;

use clap::ValueEnum;
use pathdedup::{Config, ConfigBuilder, DedupeReport, LogLevel, ResolvedConfig};
use serde::Serialize;

use crate::error::CliError;

/// Global CLI options shared by the command.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Resolved logging level.
    pub log_level: LogLevel,
}

/// How to print the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Short human-readable lines.
    Human,
    /// A single JSON object.
    Json,
}

/// Load layered configuration with CLI values as the top layer.
///
/// Precedence: CLI arguments, then `DEDUPE_PATH_*` environment variables,
/// then built-in defaults.
pub fn load_configuration(overrides: Config) -> Result<ResolvedConfig, CliError> {
    ConfigBuilder::new()
        .with_config(overrides)
        .build()
        .map_err(CliError::from)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    variable: &'a str,
    output_path: Option<&'a Path>,
    #[serde(flatten)]
    report: DedupeReport,
    exceeds_windows_limit: bool,
}

/// Render a run summary.
///
/// `output_path` is `None` for dry runs.
pub fn format_report(
    format: ReportFormat,
    variable: &str,
    output_path: Option<&Path>,
    report: &DedupeReport,
) -> Result<String, CliError> {
    match format {
        ReportFormat::Human => {
            let mut out = format!(
                "{variable}: {} entries, {} unique, {} removed\nlength: {} -> {} bytes",
                report.input_entries,
                report.unique_entries,
                report.removed_entries,
                report.input_length,
                report.output_length
            );
            if let Some(path) = output_path {
                out.push_str(&format!("\nwritten to {}", path.display()));
            }
            Ok(out)
        }
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&JsonReport {
            variable,
            output_path,
            report: *report,
            exceeds_windows_limit: report.exceeds_windows_limit(),
        })?),
    }
}
