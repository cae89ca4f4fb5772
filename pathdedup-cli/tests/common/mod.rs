//! Common test utilities for CLI integration tests.
//!
//! Every command runs with a cleared environment inside its own temporary
//! working directory, so the real PATH and stray `DEDUPE_PATH_*` settings
//! never leak into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variable the tests deduplicate instead of the real PATH.
pub const TEST_VAR: &str = "DEDUPE_PATH_TEST_INPUT";

/// Test environment with an isolated working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// A bare command: empty environment, cwd set to the temp directory.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("dedupe-path").expect("Failed to find dedupe-path binary");
        cmd.env_clear().current_dir(&self.temp_path);
        cmd
    }

    /// A command that reads `TEST_VAR`, set to `value`, with `delimiter`.
    pub fn command(&self, value: &str, delimiter: char) -> Command {
        let mut cmd = self.command_bare();
        cmd.env(TEST_VAR, value)
            .arg("--variable")
            .arg(TEST_VAR)
            .arg("--delimiter")
            .arg(delimiter.to_string());
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Read a file relative to the temp directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.temp_path.join(name)).expect("Failed to read output")
    }
}
