//! TestWorld pattern for CLI integration tests.
//!
//! Provides a fluent interface for:
//! - Creating an isolated temp directory
//! - Writing data and config files into it
//! - Running the `grouplist` binary against them

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use grouplist_testing::TestWorld;
///
/// let world = TestWorld::new().with_data("[]");
///
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    data_path: PathBuf,
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
        let base_path = temp_dir.path().to_path_buf();

        Self {
            config_path: base_path.join("config.toml"),
            data_path: base_path.join("data.json"),
            temp_dir,
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path passed as `--config` (may not exist).
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Path of the data file written by [`TestWorld::with_data`].
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Write `contents` as the data file.
    pub fn with_data(self, contents: &str) -> Self {
        std::fs::write(&self.data_path, contents).expect("Failed to write data file");
        self
    }

    /// Write `contents` as the config file.
    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(&self.config_path, contents).expect("Failed to write config file");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG").env_remove("GROUPLIST_LOG");
        cmd
    }

    /// Run the `grouplist` binary with `args` inside this environment.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("grouplist")
            .map_err(|e| anyhow::anyhow!("Failed to find grouplist binary: {}", e))?;

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
