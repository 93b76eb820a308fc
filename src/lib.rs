//! papyrus-pm library
//!
//! Scaffolds Papyrus script projects, persists a small settings file and
//! tails the application log.

pub mod app;
pub mod output;
pub mod paths;
pub mod project;
pub mod settings;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::{App, InputError, NewProjectForm};
pub use output::{read_log_content, OutputMode};
pub use paths::AppPaths;
pub use project::{create_project, is_valid_project, ProjectError, ProjectScaffolder};
pub use settings::{load_settings, save_settings, Settings};
