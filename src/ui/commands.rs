//! Actions shared by the CLI subcommands and the interactive menu.
//!
//! Each returns whether it succeeded after reporting the outcome to the user.

use console::style;
use std::path::Path;

use super::display::{format_path, print_error, print_header, print_info, print_success, print_warning};
use crate::app::{App, NewProjectForm};
use crate::project::ProjectError;
use crate::{display_print, display_println, log_info};

pub fn new_project(app: &App, form: &NewProjectForm, template: Option<&Path>) -> bool {
    match app.new_project(form, template) {
        Ok(Some(project_root)) => {
            print_success(&format!("Project '{}' created.", form.name.trim()));
            display_println!(
                "  {} {}",
                style("→").dim(),
                format_path(&project_root.display().to_string())
            );
            true
        }
        Ok(None) => {
            print_error("Failed to create project. It may already exist.");
            false
        }
        Err(err) => {
            print_error(&err.to_string());
            false
        }
    }
}

pub fn build_project(app: &App, project_path: &Path) -> bool {
    let request = match app.build_project(project_path) {
        Ok(request) => request,
        Err(ProjectError::InvalidProject { .. }) => {
            print_error("Selected folder is not a valid project.");
            return false;
        }
        Err(err) => {
            print_error(&err.to_string());
            return false;
        }
    };

    print_info(&format!(
        "Building project at:\n{}",
        request.project_path.display()
    ));
    display_println!("  Papyrus scripts: {}", request.script_count);
    match &request.compiler_path {
        Some(compiler) => display_println!("  Compiler: {}", format_path(compiler)),
        None => print_warning("No compiler path configured. Set one under Settings."),
    }
    true
}

pub fn set_compiler_path(app: &App, compiler_path: &str) -> bool {
    if app.update_compiler_path(compiler_path) {
        print_success(&format!("Compiler path set to:\n{compiler_path}"));
        true
    } else {
        print_error("Failed to save settings.");
        false
    }
}

pub fn show_settings(app: &App) {
    let settings = app.settings();
    let compiler = match settings.compiler_path() {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => style("(not set)").dim().to_string(),
    };

    print_header("Settings");
    display_println!("Compiler path:    {compiler}");
    display_println!(
        "Settings file:    {}",
        format_path(&app.paths().settings_file().display().to_string())
    );
    display_println!(
        "Project template: {}",
        format_path(&app.paths().default_template().display().to_string())
    );
}

/// Log viewer: warns when there is no log yet
pub fn view_log(app: &App, max_lines: usize) -> bool {
    if !app.log_exists() {
        print_warning("No log file found.");
        return false;
    }

    print_header("Application Log");
    display_print!("{}", app.read_log(max_lines));
    log_info!("Log file viewed.");
    true
}

/// Plain tail of the log for scripting, no decoration
pub fn print_log_tail(app: &App, max_lines: usize) {
    let content = app.read_log(max_lines);
    if content.ends_with('\n') || content.is_empty() {
        display_print!("{content}");
    } else {
        display_println!("{content}");
    }
    log_info!("Log file viewed.");
}
