//! Planning a deduplication run without touching the filesystem.

use std::path::Path;

use serde::Serialize;

use crate::dedupe::PathList;
use crate::error::Result;
use crate::output::write_output;

/// Longest environment variable value `cmd.exe` accepts, in characters.
pub const WINDOWS_PATH_LIMIT: usize = 8191;

/// Summary of a deduplication run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DedupeReport {
    /// Entries in the input, duplicates included.
    pub input_entries: usize,
    /// Entries kept in the output.
    pub unique_entries: usize,
    /// Entries dropped as duplicates.
    pub removed_entries: usize,
    /// Input length in bytes.
    pub input_length: usize,
    /// Output length in bytes.
    pub output_length: usize,
    /// Output length in characters.
    pub output_chars: usize,
}

impl DedupeReport {
    /// True when the output is still longer than [`WINDOWS_PATH_LIMIT`].
    #[must_use]
    pub const fn exceeds_windows_limit(&self) -> bool {
        self.output_chars > WINDOWS_PATH_LIMIT
    }
}

/// The computed output of a run, ready to be written.
///
/// ```
/// use pathdedup::operations::DedupePlan;
///
/// let plan = DedupePlan::build("/a:/b:/a/", ':');
/// assert_eq!(plan.output(), "/a:/b");
/// assert_eq!(plan.report().removed_entries, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupePlan {
    output: String,
    report: DedupeReport,
}

impl DedupePlan {
    /// Deduplicate `source`, split on `delimiter`.
    #[must_use]
    pub fn build(source: &str, delimiter: char) -> Self {
        let input = PathList::parse(source, delimiter);
        let deduped = input.dedupe();
        let output = deduped.join();

        let report = DedupeReport {
            input_entries: input.len(),
            unique_entries: deduped.len(),
            removed_entries: input.len() - deduped.len(),
            input_length: source.len(),
            output_length: output.len(),
            output_chars: output.chars().count(),
        };

        Self { output, report }
    }

    /// The deduplicated, delimiter-joined string.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Counts describing this plan.
    #[must_use]
    pub const fn report(&self) -> DedupeReport {
        self.report
    }

    /// Write the planned output to `output_path`, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn execute(&self, output_path: &Path) -> Result<DedupeReport> {
        write_output(output_path, &self.output)?;
        Ok(self.report)
    }
}
