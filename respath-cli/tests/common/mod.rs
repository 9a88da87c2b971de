//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's setup into a test.
const RESPATH_ENV_VARS: [&str; 7] = [
    "RESPATH_CONFIG_DIR",
    "RESPATH_CACHE_TTL_SECONDS",
    "RESPATH_READ_TIMEOUT_MS",
    "RESPATH_TRUST_SELF_SIGNED",
    "RESPATH_LEGACY_EXTENSION",
    "RESPATH_CURRENT_EXTENSION",
    "RESPATH_LOG_MODE",
];

/// Test environment with isolated configuration.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory used as the working directory
/// - A separate, empty user configuration directory
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the user configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("user-config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The command runs in the temporary directory with every `RESPATH_*`
    /// variable removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("respath").expect("Failed to find respath binary");
        cmd.current_dir(&self.temp_path);
        for key in RESPATH_ENV_VARS {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Get a command builder with the config directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file relative to the test environment and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, content: &str) {
        std::fs::write(self.config_dir.join("config.yaml"), content)
            .expect("Failed to write user config");
    }

    /// Path as the string form the CLI expects.
    pub fn display(&self, path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }
}

/// Parse stdout of a successful command as trimmed UTF-8.
#[allow(dead_code)]
pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
