//! Configuration for a deduplication run.
//!
//! Settings are layered with the following precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`), which is
//!    where CLI arguments land
//! 2. Environment variables (`DEDUPE_PATH_VARIABLE`, `DEDUPE_PATH_DELIMITER`,
//!    `DEDUPE_PATH_OUTPUT`)
//! 3. Built-in defaults: `PATH`, the platform delimiter, and `path.txt`
//!
//! # Examples
//!
//! ```no_run
//! use pathdedup::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("{} -> {}", config.variable, config.output_path.display());
//! ```

pub mod builder;
pub mod environment;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use schema::{Config, ResolvedConfig, DEFAULT_OUTPUT, DEFAULT_VARIABLE};
pub use validator::ConfigValidator;
