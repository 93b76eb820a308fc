//! Shared testing utilities for papyrus-pm CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated install root plus a directory to create projects in.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    home: PathBuf,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let home = root.path().join("papyrus-home");
        let work_dir = root.path().join("mods");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self {
            root,
            home,
            work_dir,
        }
    }

    /// Install root handed to the binary.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Directory new projects are created in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary with the isolated install root.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("papyrus-pm").expect("Failed to locate papyrus-pm binary");
        cmd.current_dir(&self.work_dir)
            .env("PAPYRUS_PM_HOME", &self.home)
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn settings_file(&self) -> PathBuf {
        self.home.join("papyruspm_config.json")
    }

    pub fn log_file(&self) -> PathBuf {
        self.home.join("logs").join("global.log")
    }

    pub fn default_template(&self) -> PathBuf {
        self.home.join("templates").join("default_project_config.json")
    }

    pub fn read_log(&self) -> String {
        fs::read_to_string(self.log_file()).unwrap_or_default()
    }
}
