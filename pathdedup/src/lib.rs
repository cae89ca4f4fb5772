#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathdedup
//!
//! Removes duplicate entries from a PATH-like environment variable while
//! keeping the order in which entries first appear, then writes the result
//! to a file.
//!
//! Some build environments keep appending the same directories to `PATH`
//! until it grows past the Windows limit of 8191 characters, after which
//! commands fail with "Line too long". Writing out a deduplicated copy lets a
//! build script reset `PATH` to a sane value.
//!
//! ## Core Types
//!
//! - [`PathList`] and [`dedupe_path_list`]: the deduplication filter
//! - [`DedupePlan`] and [`DedupeReport`]: a planned run and its summary
//! - [`ConfigBuilder`] and [`ResolvedConfig`]: layered settings
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathdedup::dedupe_path_list;
//!
//! let path = "/usr/local/bin:/usr/bin:/usr/local/bin/:/bin:/usr/bin";
//! assert_eq!(dedupe_path_list(path, ':'), "/usr/local/bin:/usr/bin:/bin");
//! ```

pub mod config;
pub mod dedupe;
pub mod error;
pub mod logging;
pub mod operations;
pub mod output;
pub mod source;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, ResolvedConfig};
pub use dedupe::{dedupe_path_list, trim_trailing_separators, PathList, PLATFORM_DELIMITER};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    dedupe_to_file, plan_run, run, DedupePlan, DedupeReport, WINDOWS_PATH_LIMIT,
};
pub use output::write_output;
pub use source::read_variable;
