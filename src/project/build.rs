//! Build placeholder: validates a project without invoking any compiler

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::scaffold::{is_valid_project, ProjectError, SCRIPTS_DIR};
use crate::log_info;
use crate::settings::Settings;
use crate::utils::fs::has_extension;

/// Papyrus source file extensions
pub const SCRIPT_EXTENSIONS: &[&str] = &["psc"];

/// What a build would work with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub project_path: PathBuf,
    /// Number of Papyrus sources below `Scripts/`
    pub script_count: usize,
    /// Configured compiler, `None` when unset or empty
    pub compiler_path: Option<String>,
}

/// Validate `project_path` and record that a build was triggered
pub fn request_build(project_path: &Path, settings: &Settings) -> Result<BuildRequest, ProjectError> {
    if !is_valid_project(project_path) {
        return Err(ProjectError::InvalidProject {
            path: project_path.to_path_buf(),
        });
    }

    let script_count = count_scripts(&project_path.join(SCRIPTS_DIR))?;
    let compiler_path = settings
        .compiler_path()
        .filter(|path| !path.trim().is_empty())
        .map(str::to_string);

    log_info!("Build triggered for project: {}", project_path.display());

    Ok(BuildRequest {
        project_path: project_path.to_path_buf(),
        script_count,
        compiler_path,
    })
}

fn count_scripts(scripts_dir: &Path) -> Result<usize, ProjectError> {
    let mut count = 0;
    for entry in WalkDir::new(scripts_dir) {
        let entry = entry.map_err(|source| ProjectError::Scan {
            path: scripts_dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && has_extension(entry.path(), SCRIPT_EXTENSIONS) {
            count += 1;
        }
    }
    Ok(count)
}
