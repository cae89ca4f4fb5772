//! The dedupe command: read the variable, drop duplicates, write the file.

use std::path::PathBuf;

use clap::Args;
use pathdedup::operations::plan_run;
use pathdedup::{Config, Logger, WINDOWS_PATH_LIMIT};

use crate::error::CliError;
use crate::utils::{format_report, load_configuration, GlobalOptions, ReportFormat};

/// Arguments for a deduplication run.
#[derive(Args)]
pub struct DedupeCommand {
    /// File to write the result to (default: path.txt)
    #[arg(value_name = "OUTPUT_PATH")]
    pub output_path: Option<PathBuf>,

    /// Environment variable to deduplicate (default: PATH)
    #[arg(long, value_name = "NAME")]
    pub variable: Option<String>,

    /// Entry delimiter (default: ';' on Windows, ':' elsewhere)
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Print the result to stdout instead of writing a file
    #[arg(long)]
    pub dry_run: bool,

    /// Print a summary of the run (to stderr with --dry-run)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub report: Option<ReportFormat>,
}

impl DedupeCommand {
    /// Execute the dedupe command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = Logger::new(global.log_level);

        let config = load_configuration(Config {
            variable: self.variable,
            delimiter: self.delimiter,
            output_path: self.output_path,
        })?;

        let plan = plan_run(&config)?;
        let report = plan.report();

        logger.info(&format!(
            "{}: removed {} of {} entries",
            config.variable, report.removed_entries, report.input_entries
        ));
        logger.debug(&format!(
            "{}: {} -> {} bytes, {} characters after deduplication",
            config.variable, report.input_length, report.output_length, report.output_chars
        ));

        if report.exceeds_windows_limit() {
            logger.warn(&format!(
                "deduplicated {} is {} characters, still over the {WINDOWS_PATH_LIMIT}-character limit",
                config.variable, report.output_chars
            ));
        }

        let written_to = if self.dry_run {
            println!("{}", plan.output());
            None
        } else {
            plan.execute(&config.output_path)?;
            logger.info(&format!("wrote {}", config.output_path.display()));
            Some(config.output_path.as_path())
        };

        if let Some(format) = self.report {
            let rendered = format_report(format, &config.variable, written_to, &report)?;
            // In a dry run stdout carries the result, so the report goes to stderr.
            if self.dry_run {
                eprintln!("{rendered}");
            } else {
                println!("{rendered}");
            }
        }

        Ok(())
    }
}
