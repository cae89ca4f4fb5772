//! Error types for the pathdedup library.
//!
//! This module provides the error hierarchy for reading a PATH-like
//! variable, resolving configuration, and writing the deduplicated result,
//! using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathdedup error.
///
/// # Examples
///
/// ```
/// use pathdedup::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/usr/bin:/bin".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathdedup library.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested environment variable is not set.
    #[error("environment variable {name} is not set")]
    VariableNotSet {
        /// Name of the variable.
        name: String,
    },

    /// The requested environment variable is not valid Unicode.
    #[error("environment variable {name} is not valid Unicode")]
    VariableNotUnicode {
        /// Name of the variable.
        name: String,
    },

    /// The requested environment variable is set but empty.
    #[error("environment variable {name} is empty")]
    VariableEmpty {
        /// Name of the variable.
        name: String,
    },

    /// The output file could not be created or written.
    #[error("cannot write output file {}: {source}", path.display())]
    OutputWrite {
        /// The destination path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
