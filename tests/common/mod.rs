//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary working directory and a separate temporary config
/// directory so tests never touch the user's real configuration.
pub struct TestProject {
    /// Working directory for the test
    pub dir: TempDir,
    /// Config directory passed through `BALLISTICS_CONFIG_DIR`
    pub config_dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            config_dir: TempDir::new().expect("Failed to create config directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Path of the global config file used by this project
    #[allow(dead_code)]
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.path().join("config.toml")
    }

    /// Run the ballistics binary in the project directory
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute ballistics")
    }

    /// Run the binary with `RUST_LOG` set to `filter`
    #[allow(dead_code)]
    pub fn run_with_log(&self, filter: &str, args: &[&str]) -> Output {
        self.command(args)
            .env("RUST_LOG", filter)
            .output()
            .expect("Failed to execute ballistics")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ballistics"));
        cmd.current_dir(self.path());
        cmd.env("BALLISTICS_CONFIG_DIR", self.config_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout as a string
#[allow(dead_code)]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string
#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

/// Sample scenario TOML for testing
#[allow(dead_code)]
pub const SAMPLE_SCENARIO: &str = r#"
[scenario]
name = "baseball"
description = "A hit at 45 degrees"

[launch]
speed = 40.0
elevation = "45deg"
height = 1.0

[body]
mass = 0.145
diameter = 0.074
drag_coefficient = 0.35

[simulation]
time_step = 0.001
samples = 10
"#;

/// Sample scenario without air
#[allow(dead_code)]
pub const VACUUM_SCENARIO: &str = r#"
[scenario]
name = "vacuum"

[launch]
speed = 10.0
elevation = 45

[body]
mass = 1.0
diameter = 0.1
drag_coefficient = 0.0

[environment]
gravity = 10.0
air_density = 0.0

[simulation]
time_step = 0.001
"#;
