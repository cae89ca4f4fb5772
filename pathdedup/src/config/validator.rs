//! Configuration validation.

use crate::config::schema::ResolvedConfig;
use crate::dedupe::TRAILING_SEPARATORS;
use crate::error::{Error, Result};

/// Validates resolved settings before a run.
///
/// ```
/// use pathdedup::config::{ConfigValidator, ResolvedConfig};
///
/// ConfigValidator::validate(&ResolvedConfig::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the variable name is empty or
    /// contains `=` or NUL, if the delimiter is a path separator, or if the
    /// output path is empty.
    pub fn validate(config: &ResolvedConfig) -> Result<()> {
        Self::validate_variable(&config.variable)?;
        Self::validate_delimiter(config.delimiter)?;

        if config.output_path.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: "output_path".into(),
                message: "output path cannot be empty".into(),
            });
        }

        Ok(())
    }

    fn validate_variable(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::Validation {
                field: "variable".into(),
                message: "variable name cannot be empty".into(),
            });
        }

        if name.contains(|c: char| c == '=' || c == '\0') {
            return Err(Error::Validation {
                field: "variable".into(),
                message: format!("variable name {name:?} cannot contain '=' or NUL"),
            });
        }

        Ok(())
    }

    fn validate_delimiter(delimiter: char) -> Result<()> {
        // Trimming would eat a separator delimiter and break idempotence.
        if TRAILING_SEPARATORS.contains(&delimiter) {
            return Err(Error::Validation {
                field: "delimiter".into(),
                message: format!("delimiter cannot be a path separator ({delimiter:?})"),
            });
        }
        Ok(())
    }
}
