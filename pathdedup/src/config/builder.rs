//! Builder that layers defaults, environment, and programmatic overrides.

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::{Config, ResolvedConfig};
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`ResolvedConfig`] from layered sources.
///
/// Precedence, highest first: programmatic overrides, `DEDUPE_PATH_*`
/// environment variables, built-in defaults.
///
/// ```
/// use pathdedup::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_env()
///     .with_config(Config {
///         delimiter: Some(';'),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.variable, "PATH");
/// assert_eq!(config.delimiter, ';');
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore `DEDUPE_PATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Add a programmatic override layer. Later layers win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merge all layers, apply defaults, and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override cannot be parsed or the
    /// resolved settings fail validation.
    pub fn build(self) -> Result<ResolvedConfig> {
        let mut merged = Config::default();

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut merged)?;
        }

        for layer in &self.overrides {
            merged.merge_from(layer);
        }

        let resolved = ResolvedConfig::from(merged);
        ConfigValidator::validate(&resolved)?;

        log::debug!(
            "resolved config: variable={} delimiter={:?} output={}",
            resolved.variable,
            resolved.delimiter,
            resolved.output_path.display()
        );
        Ok(resolved)
    }
}
