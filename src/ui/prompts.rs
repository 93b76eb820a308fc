use anyhow::{Context, Result};
use inquire::{InquireError, Select, Text};
use std::ops::ControlFlow;
use std::path::PathBuf;

use super::actions::MenuAction;
use super::commands;
use super::display::print_header;
use crate::app::{App, NewProjectForm, LOG_VIEW_LINES};
use crate::{display_println, log_info};

/// Handle prompt results to distinguish between ESC key navigation and fatal errors
/// Returns:
/// - Ok(Some(value)) for successful prompts
/// - Ok(None) for ESC key cancellation (navigation signal)
/// - Err(error) for other fatal errors
fn handle_prompt_result<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(error) => Err(anyhow::Error::from(error)),
    }
}

fn current_dir_display() -> Result<String> {
    let dir = std::env::current_dir().context("Failed to read current directory")?;
    Ok(dir.display().to_string())
}

pub fn run_menu_mode(app: &App) -> Result<()> {
    print_header("Papyrus Project Manager");
    display_println!();

    loop {
        let selection_result = Select::new("What would you like to do?", MenuAction::ALL.to_vec())
            .with_help_message("Use arrow keys to navigate • ESC to exit")
            .prompt();

        // ESC in the main menu exits
        let action = handle_prompt_result(selection_result)?.unwrap_or(MenuAction::Exit);

        if handle_action(app, action)?.is_break() {
            display_println!("👋 Goodbye!");
            break;
        }

        display_println!();
    }

    Ok(())
}

/// Run one menu action; `Break` ends the menu loop
pub fn handle_action(app: &App, action: MenuAction) -> Result<ControlFlow<()>> {
    match action {
        MenuAction::NewProject => new_project_dialog(app)?,
        MenuAction::BuildProject => build_project_dialog(app)?,
        MenuAction::Settings => settings_dialog(app)?,
        MenuAction::ViewLog => {
            commands::view_log(app, LOG_VIEW_LINES);
        }
        MenuAction::Exit => return Ok(ControlFlow::Break(())),
    }

    Ok(ControlFlow::Continue(()))
}

fn new_project_dialog(app: &App) -> Result<()> {
    let name_result = Text::new("Project name:")
        .with_help_message("Folder name of the new project • ESC to go back")
        .prompt();
    let Some(name) = handle_prompt_result(name_result)? else {
        return Ok(());
    };

    let default_dir = current_dir_display()?;
    let dir_result = Text::new("Target directory:")
        .with_default(&default_dir)
        .with_help_message("Existing folder to create the project in • ESC to go back")
        .prompt();
    let Some(target_dir) = handle_prompt_result(dir_result)? else {
        return Ok(());
    };

    let form = NewProjectForm::new(name, PathBuf::from(target_dir.trim()));
    commands::new_project(app, &form, None);
    Ok(())
}

fn build_project_dialog(app: &App) -> Result<()> {
    let default_dir = current_dir_display()?;
    let path_result = Text::new("Project folder to build:")
        .with_default(&default_dir)
        .with_help_message("ESC to go back")
        .prompt();
    let Some(project_path) = handle_prompt_result(path_result)? else {
        return Ok(());
    };

    commands::build_project(app, &PathBuf::from(project_path.trim()));
    Ok(())
}

fn settings_dialog(app: &App) -> Result<()> {
    let settings = app.settings();
    let current = settings.compiler_path().unwrap_or_default();

    let path_result = Text::new("Set path to Papyrus Compiler:")
        .with_initial_value(current)
        .with_help_message("Leave empty to clear • ESC to cancel")
        .prompt();

    match handle_prompt_result(path_result)? {
        Some(compiler_path) => {
            commands::set_compiler_path(app, &compiler_path);
        }
        None => log_info!("Settings dialog cancelled or empty input."),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::AppPaths;
    use tempfile::tempdir;

    #[test]
    fn test_escape_is_not_an_error() {
        let result: Result<String, InquireError> = Err(InquireError::OperationCanceled);
        assert!(handle_prompt_result(result).unwrap().is_none());

        let result: Result<String, InquireError> = Ok("Quest1".to_string());
        assert_eq!(handle_prompt_result(result).unwrap().as_deref(), Some("Quest1"));

        let result: Result<String, InquireError> = Err(InquireError::NotTTY);
        assert!(handle_prompt_result(result).is_err());
    }

    #[test]
    fn test_exit_and_view_log_need_no_input() {
        let dir = tempdir().unwrap();
        let app = App::new(AppPaths::new(dir.path()));

        assert!(handle_action(&app, MenuAction::Exit).unwrap().is_break());
        assert!(handle_action(&app, MenuAction::ViewLog)
            .unwrap()
            .is_continue());
    }
}
