//! Controller shared by the CLI subcommands and the interactive menu

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::output::read_log_content;
use crate::paths::AppPaths;
use crate::project::template::install_default_template;
use crate::project::{create_project, request_build, BuildRequest, ProjectError};
use crate::settings::{load_settings, save_settings, Settings};
use crate::utils::fs::{ensure_directory_exists, expand_tilde};
use crate::{log_debug, log_error, log_info};

/// Lines shown by the log viewer
pub const LOG_VIEW_LINES: usize = 1000;

/// Problems with what the user typed. Shown to the user, never logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Project name cannot be empty.")]
    EmptyName,

    #[error("Project name must not contain path separators.")]
    NameWithSeparator,

    #[error("Target directory is invalid.")]
    InvalidTargetDirectory,
}

/// Contents of the new-project form
#[derive(Debug, Clone)]
pub struct NewProjectForm {
    pub name: String,
    pub target_dir: PathBuf,
}

impl NewProjectForm {
    pub fn new(name: impl Into<String>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            target_dir: target_dir.into(),
        }
    }

    /// Trimmed project name and tilde-expanded target directory
    pub fn validate(&self) -> Result<(&str, PathBuf), InputError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(InputError::EmptyName);
        }
        if name.contains(&['/', '\\'][..]) {
            return Err(InputError::NameWithSeparator);
        }

        let target_dir = expand_tilde(&self.target_dir);
        if !target_dir.is_dir() {
            return Err(InputError::InvalidTargetDirectory);
        }

        Ok((name, target_dir))
    }
}

pub struct App {
    paths: AppPaths,
}

impl App {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    /// Make sure the install root and the default template exist
    pub fn prepare(&self) -> Result<()> {
        ensure_directory_exists(self.paths.root())?;
        install_default_template(&self.paths.default_template())?;
        log_debug!("Using install root {}", self.paths.root().display());
        Ok(())
    }

    /// Validate the form and scaffold the project.
    ///
    /// `Ok(None)` means the scaffolder refused or failed; the reason is
    /// already in the log.
    pub fn new_project(
        &self,
        form: &NewProjectForm,
        template: Option<&Path>,
    ) -> Result<Option<PathBuf>, InputError> {
        let (name, target_dir) = form.validate()?;
        let template = template
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.paths.default_template());

        if !create_project(name, &target_dir, &template) {
            return Ok(None);
        }

        let project_root = target_dir.join(name);
        log_info!("Created new project: {}", project_root.display());
        Ok(Some(project_root))
    }

    pub fn build_project(&self, project_path: &Path) -> Result<BuildRequest, ProjectError> {
        let project_path = expand_tilde(project_path);
        let result = request_build(&project_path, &self.settings());
        if let Err(err @ ProjectError::Scan { .. }) = &result {
            log_error!("Build failed: {err}");
        }
        result
    }

    pub fn settings(&self) -> Settings {
        load_settings(self.paths.settings_file())
    }

    /// Read-modify-write the settings file with a new compiler path
    pub fn update_compiler_path(&self, compiler_path: &str) -> bool {
        let mut settings = self.settings();
        settings.set_compiler_path(compiler_path);

        if !save_settings(self.paths.settings_file(), &settings) {
            return false;
        }

        log_info!("Compiler path updated to: {compiler_path}");
        true
    }

    pub fn log_exists(&self) -> bool {
        self.paths.log_file().is_file()
    }

    pub fn read_log(&self, max_lines: usize) -> String {
        read_log_content(self.paths.log_file(), max_lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn prepared_app() -> (TempDir, App) {
        let dir = tempdir().unwrap();
        let app = App::new(AppPaths::new(dir.path().join("home")));
        app.prepare().unwrap();
        (dir, app)
    }

    #[test]
    fn test_form_validation() {
        let dir = tempdir().unwrap();

        let form = NewProjectForm::new("   ", dir.path());
        assert_eq!(form.validate().unwrap_err(), InputError::EmptyName);

        let form = NewProjectForm::new("a/b", dir.path());
        assert_eq!(form.validate().unwrap_err(), InputError::NameWithSeparator);

        let form = NewProjectForm::new("Quest1", dir.path().join("missing"));
        assert_eq!(
            form.validate().unwrap_err(),
            InputError::InvalidTargetDirectory
        );

        let form = NewProjectForm::new("  Quest1 ", dir.path());
        let (name, target) = form.validate().unwrap();
        assert_eq!(name, "Quest1");
        assert_eq!(target, dir.path());
    }

    #[test]
    fn test_prepare_installs_template() {
        let (_dir, app) = prepared_app();
        assert!(app.paths().default_template().is_file());
    }

    #[test]
    fn test_new_project_uses_default_template() {
        let (dir, app) = prepared_app();
        let form = NewProjectForm::new("Quest1", dir.path());

        let project = app.new_project(&form, None).unwrap().unwrap();
        assert_eq!(project, dir.path().join("Quest1"));
        assert_eq!(
            fs::read(project.join("project_config.json")).unwrap(),
            fs::read(app.paths().default_template()).unwrap()
        );

        // Second attempt is refused by the scaffolder, not by validation
        assert_eq!(app.new_project(&form, None).unwrap(), None);
    }

    #[test]
    fn test_build_requires_valid_project() {
        let (dir, app) = prepared_app();
        assert!(matches!(
            app.build_project(dir.path()),
            Err(ProjectError::InvalidProject { .. })
        ));

        let form = NewProjectForm::new("Quest1", dir.path());
        let project = app.new_project(&form, None).unwrap().unwrap();
        let request = app.build_project(&project).unwrap();
        assert_eq!(request.script_count, 0);
    }

    #[test]
    fn test_update_compiler_path_keeps_other_settings() {
        let (_dir, app) = prepared_app();
        fs::write(
            app.paths().settings_file(),
            r#"{"compiler_path": "old.exe", "game": "SkyrimSE"}"#,
        )
        .unwrap();

        assert!(app.update_compiler_path("new.exe"));

        let settings = app.settings();
        assert_eq!(settings.compiler_path(), Some("new.exe"));
        assert_eq!(settings.get("game"), Some(&serde_json::json!("SkyrimSE")));

        // Empty string clears the path but is still stored
        assert!(app.update_compiler_path(""));
        assert_eq!(app.settings().compiler_path(), Some(""));
    }

    #[test]
    fn test_log_reading() {
        let (_dir, app) = prepared_app();
        assert!(!app.log_exists());
        assert_eq!(app.read_log(10), "Log file not found.");

        fs::create_dir_all(app.paths().log_dir()).unwrap();
        fs::write(app.paths().log_file(), "a\nb\nc\n").unwrap();
        assert!(app.log_exists());
        assert_eq!(app.read_log(1), "c\n");
    }
}
