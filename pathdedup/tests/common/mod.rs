//! Common test utilities for integration tests.
//!
//! Helpers for scratch directories and for setting process environment
//! variables that are restored when the test ends.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

/// A scratch directory with a conventional output path inside it.
pub struct Scratch {
    /// Kept alive for the duration of the test.
    #[allow(dead_code)]
    dir: TempDir,
    /// Where the tests write their output.
    pub output: PathBuf,
}

impl Scratch {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = dir.path().join("path.txt");
        Self { dir, output }
    }

    #[allow(dead_code)]
    pub fn read_output(&self) -> String {
        std::fs::read_to_string(&self.output).expect("Failed to read output file")
    }
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this must be marked `#[serial]`.
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    pub fn unset(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}
