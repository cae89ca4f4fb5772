//! Configuration schema definitions.

use std::path::PathBuf;

use crate::dedupe::PLATFORM_DELIMITER;

/// Name of the variable read when none is configured.
pub const DEFAULT_VARIABLE: &str = "PATH";

/// Output file written when none is configured, relative to the working
/// directory.
pub const DEFAULT_OUTPUT: &str = "path.txt";

/// One layer of configuration. Unset fields defer to lower layers.
///
/// # Examples
///
/// ```
/// use pathdedup::config::Config;
///
/// let config = Config {
///     variable: Some("LIBPATH".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.delimiter, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Environment variable to read.
    pub variable: Option<String>,

    /// Entry delimiter.
    pub delimiter: Option<char>,

    /// Destination file.
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Overwrite fields of `self` with the fields `other` sets.
    pub fn merge_from(&mut self, other: &Config) {
        if let Some(ref variable) = other.variable {
            self.variable = Some(variable.clone());
        }
        if let Some(delimiter) = other.delimiter {
            self.delimiter = Some(delimiter);
        }
        if let Some(ref output_path) = other.output_path {
            self.output_path = Some(output_path.clone());
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Environment variable to read.
    pub variable: String,
    /// Entry delimiter.
    pub delimiter: char,
    /// Destination file.
    pub output_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            variable: DEFAULT_VARIABLE.to_string(),
            delimiter: PLATFORM_DELIMITER,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl From<Config> for ResolvedConfig {
    fn from(config: Config) -> Self {
        let defaults = Self::default();
        Self {
            variable: config.variable.unwrap_or(defaults.variable),
            delimiter: config.delimiter.unwrap_or(defaults.delimiter),
            output_path: config.output_path.unwrap_or(defaults.output_path),
        }
    }
}
