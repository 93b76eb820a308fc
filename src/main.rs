use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use papyrus_pm::output::{self, OutputMode, DEFAULT_TAIL_LINES};
use papyrus_pm::paths::HOME_ENV_VAR;
use papyrus_pm::ui::{commands, prompts};
use papyrus_pm::utils::fs::expand_tilde;
use papyrus_pm::{App, AppPaths, NewProjectForm};

#[derive(Parser)]
#[command(name = "papyrus-pm")]
#[command(
    about = "Lightweight project manager for Papyrus script projects",
    long_about = "Papyrus PM scaffolds Papyrus script projects and keeps track of\n\
                  the compiler you build them with.\n\n\
                  GETTING STARTED:\n  \
                  1. Run 'papyrus-pm' to start the interactive menu\n  \
                  2. Create a project with 'papyrus-pm new MyQuest --dir ~/Mods'\n  \
                  3. Point at your compiler with 'papyrus-pm settings set-compiler <PATH>'\n  \
                  4. Check a project with 'papyrus-pm build ~/Mods/MyQuest'"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress everything but errors on the terminal
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Directory holding settings, logs and templates
    #[arg(long, global = true, env = HOME_ENV_VAR)]
    home: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project from the template
    New {
        /// Project name, used as the folder name
        name: String,

        /// Directory to create the project in (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Template copied as project_config.json
        #[arg(short, long)]
        template: Option<PathBuf>,
    },

    /// Validate a project and trigger a build
    Build {
        /// Project directory (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// Manage persisted settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },

    /// Print the last lines of the application log
    Log {
        /// Number of lines to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_TAIL_LINES)]
        lines: usize,
    },

    /// Interactive menu system
    Menu,
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Show current settings
    Show,

    /// Set the path to the Papyrus compiler
    SetCompiler {
        /// Compiler executable
        path: String,
    },

    /// Clear the configured compiler path
    ClearCompiler,
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to read current directory")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AppPaths::resolve(cli.home);
    let output_mode = match (&cli.command, cli.quiet) {
        (_, true) => OutputMode::Quiet,
        (None | Some(Commands::Menu), false) => OutputMode::Interactive,
        _ => OutputMode::Cli,
    };

    // Initialize output system (this handles tracing setup)
    output::init_with_verbosity(output_mode, cli.verbose, &paths.log_file())?;

    let app = App::new(paths);
    app.prepare()?;

    let succeeded = match cli.command {
        None | Some(Commands::Menu) => {
            prompts::run_menu_mode(&app)?;
            true
        }
        Some(Commands::New {
            name,
            dir,
            template,
        }) => {
            let target_dir = match dir {
                Some(dir) => expand_tilde(dir),
                None => current_dir()?,
            };
            let template = template.map(expand_tilde);
            let form = NewProjectForm::new(name, target_dir);
            commands::new_project(&app, &form, template.as_deref())
        }
        Some(Commands::Build { path }) => {
            let project_path = match path {
                Some(path) => path,
                None => current_dir()?,
            };
            commands::build_project(&app, &project_path)
        }
        Some(Commands::Settings { command }) => match command {
            SettingsCommands::Show => {
                commands::show_settings(&app);
                true
            }
            SettingsCommands::SetCompiler { path } => commands::set_compiler_path(&app, &path),
            SettingsCommands::ClearCompiler => commands::set_compiler_path(&app, ""),
        },
        Some(Commands::Log { lines }) => {
            commands::print_log_tail(&app, lines);
            true
        }
    };

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}
