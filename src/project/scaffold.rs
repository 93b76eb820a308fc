use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{log_error, log_info, log_warn};

/// Template copy inside every project
pub const PROJECT_CONFIG_FILE: &str = "project_config.json";
pub const SCRIPTS_DIR: &str = "Scripts";
pub const RESOURCES_DIR: &str = "Resources";

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("{} already exists", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to copy template {} to {}: {source}", template.display(), destination.display())]
    CopyTemplate {
        template: PathBuf,
        destination: PathBuf,
        source: io::Error,
    },

    #[error("{} is not a valid project", path.display())]
    InvalidProject { path: PathBuf },

    #[error("Failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// Creates `<target>/<name>/{Scripts/, Resources/, project_config.json}`
#[derive(Debug, Clone)]
pub struct ProjectScaffolder {
    template_path: PathBuf,
}

impl ProjectScaffolder {
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
        }
    }

    /// Scaffold a new project and return its root.
    ///
    /// An existing path is never touched. If anything fails after the
    /// project root was created, the root is removed again so no half-built
    /// project is left behind.
    pub fn create(&self, name: &str, target_dir: &Path) -> Result<PathBuf, ProjectError> {
        let project_root = target_dir.join(name);
        if project_root.exists() {
            return Err(ProjectError::AlreadyExists { path: project_root });
        }

        fs::create_dir_all(target_dir).map_err(|source| ProjectError::CreateDir {
            path: target_dir.to_path_buf(),
            source,
        })?;
        create_project_root(&project_root)?;

        if let Err(err) = self.populate(&project_root) {
            rollback(&project_root);
            return Err(err);
        }

        log_info!("Project created at {}", project_root.display());
        Ok(project_root)
    }

    fn populate(&self, project_root: &Path) -> Result<(), ProjectError> {
        for dir in [SCRIPTS_DIR, RESOURCES_DIR] {
            let path = project_root.join(dir);
            fs::create_dir(&path).map_err(|source| ProjectError::CreateDir { path, source })?;
        }

        let destination = project_root.join(PROJECT_CONFIG_FILE);
        fs::copy(&self.template_path, &destination).map_err(|source| {
            ProjectError::CopyTemplate {
                template: self.template_path.clone(),
                destination,
                source,
            }
        })?;

        Ok(())
    }
}

/// Create the project root itself; fails if anything is already there, so
/// rollback only ever removes a directory this call made
fn create_project_root(project_root: &Path) -> Result<(), ProjectError> {
    fs::create_dir(project_root).map_err(|source| match source.kind() {
        io::ErrorKind::AlreadyExists => ProjectError::AlreadyExists {
            path: project_root.to_path_buf(),
        },
        _ => ProjectError::CreateDir {
            path: project_root.to_path_buf(),
            source,
        },
    })
}

fn rollback(project_root: &Path) {
    match fs::remove_dir_all(project_root) {
        Ok(()) => log_warn!(
            "Removed partially created project at {}",
            project_root.display()
        ),
        Err(err) => log_error!(
            "Failed to remove partially created project at {}: {}",
            project_root.display(),
            err
        ),
    }
}

/// Scaffold a project, logging any failure instead of returning it
pub fn create_project<P, Q>(name: &str, target_dir: P, template_path: Q) -> bool
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let scaffolder = ProjectScaffolder::new(template_path.as_ref());
    match scaffolder.create(name, target_dir.as_ref()) {
        Ok(_) => true,
        Err(ProjectError::AlreadyExists { path }) => {
            log_error!("Project creation failed: {} already exists.", path.display());
            false
        }
        Err(err) => {
            log_error!("Project creation failed: {err}");
            false
        }
    }
}

/// A directory is a project when it holds `project_config.json` and `Scripts/`
pub fn is_valid_project<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    path.join(PROJECT_CONFIG_FILE).is_file() && path.join(SCRIPTS_DIR).is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    const TEMPLATE: &str = "{\n    \"name\": \"\",\n    \"version\": \"1.0.0\"\n}";

    fn template_in(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("default_project_config.json");
        fs::write(&path, TEMPLATE).unwrap();
        path
    }

    #[test]
    fn test_create_project_builds_layout() {
        let dir = tempdir().unwrap();
        let template = template_in(&dir);
        let target = dir.path().join("proj");
        fs::create_dir(&target).unwrap();

        assert!(create_project("Quest1", &target, &template));

        let project = target.join("Quest1");
        assert!(project.join("Scripts").is_dir());
        assert!(project.join("Resources").is_dir());
        assert_eq!(
            fs::read_to_string(project.join("project_config.json")).unwrap(),
            TEMPLATE
        );
        assert!(is_valid_project(&project));
    }

    #[test]
    fn test_second_create_fails_and_keeps_first_project() {
        let dir = tempdir().unwrap();
        let template = template_in(&dir);

        assert!(create_project("Quest1", dir.path(), &template));
        let script = dir.path().join("Quest1/Scripts/MyQuest.psc");
        fs::write(&script, "Scriptname MyQuest extends Quest").unwrap();

        assert!(!create_project("Quest1", dir.path(), &template));
        assert!(script.is_file());
        assert_eq!(
            fs::read_to_string(dir.path().join("Quest1/project_config.json")).unwrap(),
            TEMPLATE
        );
    }

    #[test]
    fn test_existing_path_is_reported() {
        let dir = tempdir().unwrap();
        let template = template_in(&dir);
        fs::write(dir.path().join("Quest1"), "not a directory").unwrap();

        let err = ProjectScaffolder::new(&template)
            .create("Quest1", dir.path())
            .unwrap_err();
        assert!(matches!(err, ProjectError::AlreadyExists { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("Quest1")).unwrap(),
            "not a directory"
        );
    }

    #[test]
    fn test_project_root_appearing_late_is_left_alone() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("Quest1");
        fs::create_dir_all(root.join("Scripts")).unwrap();
        fs::write(root.join("Scripts/Other.psc"), "Scriptname Other").unwrap();

        // Directory already there when the root is made, as if another
        // process won the race after the existence check
        let err = create_project_root(&root).unwrap_err();
        assert!(matches!(err, ProjectError::AlreadyExists { ref path } if path == &root));
        assert_eq!(
            fs::read_to_string(root.join("Scripts/Other.psc")).unwrap(),
            "Scriptname Other"
        );

        let err = create_project_root(&dir.path().join("missing/Quest2")).unwrap_err();
        assert!(matches!(err, ProjectError::CreateDir { .. }));

        create_project_root(&dir.path().join("Quest3")).unwrap();
        assert!(dir.path().join("Quest3").is_dir());
    }

    #[test]
    fn test_failed_copy_rolls_back() {
        let dir = tempdir().unwrap();
        let missing_template = dir.path().join("missing.json");

        let err = ProjectScaffolder::new(&missing_template)
            .create("Quest1", dir.path())
            .unwrap_err();
        assert!(matches!(err, ProjectError::CopyTemplate { .. }));
        assert!(!dir.path().join("Quest1").exists());

        assert!(!create_project("Quest2", dir.path(), &missing_template));
        assert!(!dir.path().join("Quest2").exists());
    }

    #[test]
    fn test_missing_target_dir_is_created() {
        let dir = tempdir().unwrap();
        let template = template_in(&dir);
        let target = dir.path().join("not").join("yet");

        let project = ProjectScaffolder::new(&template)
            .create("Quest1", &target)
            .unwrap();
        assert_eq!(project, target.join("Quest1"));
        assert!(is_valid_project(&project));
    }

    #[test]
    fn test_is_valid_project_requires_both_markers() {
        let dir = tempdir().unwrap();
        let project = dir.path();
        assert!(!is_valid_project(project));

        fs::write(project.join("project_config.json"), "{}").unwrap();
        assert!(!is_valid_project(project));

        // Scripts as a file does not count
        fs::write(project.join("Scripts"), "").unwrap();
        assert!(!is_valid_project(project));

        fs::remove_file(project.join("Scripts")).unwrap();
        fs::create_dir(project.join("Scripts")).unwrap();
        assert!(is_valid_project(project));

        assert!(!is_valid_project(project.join("does-not-exist")));
    }
}
