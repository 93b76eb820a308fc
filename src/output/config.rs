//! Output configuration and tracing setup

use anyhow::{Context, Result};
use console::Term;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use super::format::LineFormat;
use crate::utils::fs::ensure_directory_exists;

/// Output mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Normal CLI operation - display to stdout, warnings to stderr
    Cli,
    /// Interactive menu - display to stdout, log events go to the file only
    Interactive,
    /// Display output suppressed, only errors reach the terminal
    Quiet,
}

/// Configuration for the output system
#[derive(Debug)]
pub struct OutputConfig {
    mode: OutputMode,
    color_enabled: bool,
    log_level: Level,
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(mode: OutputMode) -> Self {
        let color_enabled = Term::stderr().features().colors_supported();

        // Console level from environment or defaults; the log file always gets INFO
        let log_level = match std::env::var("RUST_LOG") {
            Ok(level) => match level.to_lowercase().as_str() {
                "trace" => Level::TRACE,
                "debug" => Level::DEBUG,
                "info" => Level::INFO,
                "warn" => Level::WARN,
                "error" => Level::ERROR,
                _ => Self::default_level(mode),
            },
            Err(_) => Self::default_level(mode),
        };

        Self {
            mode,
            color_enabled,
            log_level,
        }
    }

    fn default_level(mode: OutputMode) -> Level {
        match mode {
            OutputMode::Cli | OutputMode::Interactive => Level::WARN,
            OutputMode::Quiet => Level::ERROR,
        }
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Get the current console log level
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Whether log events are echoed to stderr. The menu redraws its prompts
    /// on the terminal, so interleaved log lines stay in the file.
    pub fn console_enabled(&self) -> bool {
        self.mode != OutputMode::Interactive
    }

    /// Set verbose mode (DEBUG level)
    pub fn set_verbose(&mut self) {
        self.log_level = Level::DEBUG;
    }

    /// Install the process-wide subscriber: append-only log file plus stderr
    /// unless the console is disabled for this mode
    pub fn init_tracing(&self, log_file: &Path) -> Result<()> {
        if let Some(log_dir) = log_file.parent() {
            ensure_directory_exists(log_dir)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .event_format(LineFormat)
            .with_filter(LevelFilter::INFO);

        let console_layer = self.console_enabled().then(|| {
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .without_time()
                .with_ansi(self.color_enabled)
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env().add_directive(self.log_level.into()))
        });

        tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer)
            .try_init()
            .context("Failed to install tracing subscriber")?;

        Ok(())
    }
}
