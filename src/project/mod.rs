//! Papyrus project scaffolding and validation

mod build;
mod scaffold;
pub mod template;

pub use build::{request_build, BuildRequest, SCRIPT_EXTENSIONS};
pub use scaffold::{
    create_project, is_valid_project, ProjectError, ProjectScaffolder, PROJECT_CONFIG_FILE,
    RESOURCES_DIR, SCRIPTS_DIR,
};
