use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{log_error, log_info};

/// Path to the Papyrus compiler executable
pub const COMPILER_PATH_KEY: &str = "compiler_path";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize settings: {source}")]
    Serialize { source: serde_json::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Flat JSON object of user settings.
///
/// Always read and written as a whole; keys this tool does not know about
/// are carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: Map<String, Value>,
}

impl Settings {
    /// Load settings from a specific path, empty when the file is absent
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save settings to a specific path, replacing its contents
    pub fn save_to_path(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut json = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut json, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)
            .map_err(|source| SettingsError::Serialize { source })?;

        fs::write(path, json).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn compiler_path(&self) -> Option<&str> {
        self.values.get(COMPILER_PATH_KEY).and_then(Value::as_str)
    }

    pub fn set_compiler_path(&mut self, path: impl Into<String>) {
        self.values
            .insert(COMPILER_PATH_KEY.to_string(), Value::String(path.into()));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Load settings, falling back to an empty map on any error (which is logged)
pub fn load_settings<P: AsRef<Path>>(path: P) -> Settings {
    match Settings::load_from_path(path.as_ref()) {
        Ok(settings) => settings,
        Err(err) => {
            log_error!("Failed to load settings: {err}");
            Settings::default()
        }
    }
}

/// Save settings, returning `false` on any error (which is logged)
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> bool {
    let path = path.as_ref();
    match settings.save_to_path(path) {
        Ok(()) => {
            log_info!("Settings saved to {}", path.display());
            true
        }
        Err(err) => {
            log_error!("Failed to save settings: {err}");
            false
        }
    }
}
