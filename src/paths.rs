//! Install-root layout: where settings, logs and templates live

use std::path::{Path, PathBuf};

use crate::utils::fs::expand_tilde;

/// Install root directory name relative to the home directory
pub const HOME_DIR_NAME: &str = ".papyrus-pm";

/// Environment variable overriding the install root
pub const HOME_ENV_VAR: &str = "PAPYRUS_PM_HOME";

pub const SETTINGS_FILE_NAME: &str = "papyruspm_config.json";
pub const LOG_DIR_NAME: &str = "logs";
pub const LOG_FILE_NAME: &str = "global.log";
pub const TEMPLATES_DIR_NAME: &str = "templates";
pub const DEFAULT_TEMPLATE_FILE_NAME: &str = "default_project_config.json";

/// Get the default install root (`~/.papyrus-pm`)
pub fn default_home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(HOME_DIR_NAME)
}

/// Fixed file locations below a single install root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Use the override when given, otherwise the default install root
    pub fn resolve(root_override: Option<PathBuf>) -> Self {
        match root_override {
            Some(root) => Self::new(expand_tilde(root)),
            None => Self::new(default_home_dir()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root.join(LOG_DIR_NAME)
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join(LOG_FILE_NAME)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR_NAME)
    }

    pub fn default_template(&self) -> PathBuf {
        self.templates_dir().join(DEFAULT_TEMPLATE_FILE_NAME)
    }
}
