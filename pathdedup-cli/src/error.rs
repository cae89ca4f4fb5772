//! CLI-specific error types with exit codes.
//!
//! Sorts library errors into categories and maps them to process exit codes.

use std::fmt;

use pathdedup::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// The variable to deduplicate is unset, empty, or not Unicode.
    MissingVariable(LibError),

    /// I/O error, including failure to write the output file.
    Io(LibError),

    /// Configuration error.
    Config(String),

    /// Failure to render the report.
    Report(serde_json::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 2: Invalid arguments (reported by clap before we run)
    /// - 3: Variable missing, empty, or not Unicode
    /// - 5: I/O error
    /// - 6: Report rendering failure
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingVariable(_) => 3,
            CliError::Io(_) => 5,
            CliError::Report(_) => 6,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingVariable(e) | CliError::Io(e) => {
                write!(f, "{e}")
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Report(e) => write!(f, "Cannot render report: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::MissingVariable(e) | CliError::Io(e) => Some(e),
            CliError::Report(e) => Some(e),
            CliError::Config(_) => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::VariableNotSet { .. }
            | LibError::VariableEmpty { .. }
            | LibError::VariableNotUnicode { .. } => CliError::MissingVariable(e),
            LibError::OutputWrite { .. } | LibError::Io(_) => CliError::Io(e),
            LibError::Validation { .. } => CliError::Config(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Report(e)
    }
}
