//! Bundled default project template

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::log_info;
use crate::utils::fs::ensure_directory_exists;

/// Copied verbatim into new projects as `project_config.json`
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/default_project_config.json");

/// Write the bundled template to `path` unless a template is already there.
///
/// Returns `true` when the file was written. An existing template is never
/// overwritten, so local edits survive upgrades.
pub fn install_default_template(path: &Path) -> Result<bool> {
    if path.is_file() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        ensure_directory_exists(parent)?;
    }

    fs::write(path, DEFAULT_TEMPLATE)
        .with_context(|| format!("Failed to write default template: {}", path.display()))?;

    log_info!("Installed default project template at {}", path.display());
    Ok(true)
}
