//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Placing session files in a data directory
//! - Executing CLI commands with an isolated configuration

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{self, SessionBuilder};

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use rtstat_testing::{SessionBuilder, TestWorld};
///
/// let world = TestWorld::new()
///     .with_session("p001.csv", SessionBuilder::new("P001", "A").trial(250.0, 1));
///
/// let session_path = world.data_path("p001.csv");
/// assert!(session_path.exists());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    config_path: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let config_path = temp_dir.path().join(".rtstat").join("config.toml");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            config_path,
        }
    }

    /// Get the data directory path holding session files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the configuration file path used by `configure_command`.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Path of a file inside the data directory.
    pub fn data_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Path of a file relative to the temp root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Write a session file into the data directory.
    pub fn with_session(self, name: &str, session: SessionBuilder) -> Self {
        session
            .write_to(&self.data_path(name))
            .expect("Failed to write session");
        self
    }

    /// Write a file with arbitrary content into the data directory.
    pub fn with_raw_file(self, name: &str, content: &str) -> Self {
        fixtures::write_raw(&self.data_path(name), content).expect("Failed to write file");
        self
    }

    /// Write the configuration file used by `configure_command`.
    pub fn with_config(self, toml: &str) -> Self {
        fixtures::write_raw(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("rtstat")`).
    /// Commands run from the temp root with an isolated configuration file.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .current_dir(self.temp_dir.path())
            .env_remove("RTSTAT_CONFIG")
            .env_remove("RUST_LOG")
    }

    /// Read a file relative to the temp root.
    pub fn read(&self, relative: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.path(relative))?)
    }
}
