//! Environment variable handling for configuration overrides.
//!
//! Supports `DEDUPE_PATH_*` variables that override the built-in defaults.

use std::env::{self, VarError};
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides the name of the variable to deduplicate.
pub const VARIABLE_VAR: &str = "DEDUPE_PATH_VARIABLE";

/// Overrides the entry delimiter.
pub const DELIMITER_VAR: &str = "DEDUPE_PATH_DELIMITER";

/// Overrides the output file path.
pub const OUTPUT_VAR: &str = "DEDUPE_PATH_OUTPUT";

/// Handles environment variable overrides for configuration.
///
/// ```no_run
/// use pathdedup::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `DEDUPE_PATH_*` overrides to `config`.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any override is not valid Unicode, or if
    /// `DEDUPE_PATH_DELIMITER` is not a single character.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(variable) = Self::non_empty(VARIABLE_VAR)? {
            config.variable = Some(variable);
        }

        if let Some(delimiter) = Self::non_empty(DELIMITER_VAR)? {
            config.delimiter = Some(Self::parse_delimiter(DELIMITER_VAR, &delimiter)?);
        }

        if let Some(output) = Self::non_empty(OUTPUT_VAR)? {
            config.output_path = Some(PathBuf::from(output));
        }

        Ok(())
    }

    fn non_empty(name: &str) -> Result<Option<String>> {
        match env::var(name) {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(Error::Validation {
                field: name.into(),
                message: "value is not valid Unicode".into(),
            }),
        }
    }

    /// Parse a single-character delimiter.
    pub(crate) fn parse_delimiter(field: &str, value: &str) -> Result<char> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("delimiter must be a single character, got {value:?}"),
            }),
        }
    }
}
