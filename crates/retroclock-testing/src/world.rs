//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temp directory holding its config file, so tests never
//! touch the user's real `~/.config/retroclock`.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Isolated environment for running the `retroclock` binary.
///
/// # Example
/// ```no_run
/// use retroclock_testing::TestWorld;
///
/// let world = TestWorld::new().with_config("[clock]\nformat = \"24h\"\n");
/// let result = world.run(&["show", "--at", "2024-01-01T00:00:00"]).unwrap();
/// assert!(result.stdout().contains("00:00"));
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    config_via_env: bool,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("retroclock").join("config.toml");

        Self {
            temp_dir,
            config_path,
            config_via_env: false,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `contents` as this world's config file.
    pub fn with_config(self, contents: &str) -> Self {
        fixtures::write_config(&self.config_path, contents).expect("Failed to write config");
        self
    }

    /// Point the binary at the config through `RETROCLOCK_CONFIG` instead of
    /// `--config`.
    pub fn config_from_env(mut self) -> Self {
        self.config_via_env = true;
        self
    }

    /// Configure a CLI command with this world's config.
    ///
    /// The caller provides the base command, e.g. from `cargo_bin_cmd!("retroclock")`.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.env_remove("RUST_LOG");
        if self.config_via_env {
            cmd.env("RETROCLOCK_CONFIG", &self.config_path);
        } else {
            cmd.env_remove("RETROCLOCK_CONFIG");
            cmd.arg("--config").arg(&self.config_path);
        }

        cmd.current_dir(self.temp_dir.path());

        cmd
    }

    /// Run the binary with `args` in this world and capture its output.
    ///
    /// # Note
    /// Uses `Command::cargo_bin()`, which relies on the `CARGO_BIN_EXE_`
    /// variables cargo sets for integration tests.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("retroclock")
            .map_err(|e| anyhow::anyhow!("Failed to find retroclock binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
