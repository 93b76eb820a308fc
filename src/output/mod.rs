//! Unified output interface: user-facing display plus the application log
//!
//! Display output goes to stdout unless the quiet mode is selected. Every
//! `log_*!` event is appended to the log file as one
//! `timestamp - LEVEL - message` line; warnings and errors are echoed on
//! stderr as well.

mod config;
mod display;
mod format;
mod logging;
mod tail;
#[doc(hidden)]
pub mod writer;

pub use config::{OutputConfig, OutputMode};
pub use format::{LineFormat, TIMESTAMP_FORMAT};
pub use tail::{read_log_content, DEFAULT_TAIL_LINES, LOG_NOT_FOUND};

use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::RwLock;

static OUTPUT_CONFIG: OnceCell<RwLock<OutputConfig>> = OnceCell::new();

/// Initialize the output system with the specified mode and verbosity
pub fn init_with_verbosity(mode: OutputMode, verbose: bool, log_file: &Path) -> Result<()> {
    let mut config = OutputConfig::new(mode);
    if verbose {
        config.set_verbose();
    }

    config.init_tracing(log_file)?;

    if OUTPUT_CONFIG.set(RwLock::new(config)).is_err() {
        anyhow::bail!("Output system already initialized");
    }

    crate::log_info!("Logger initialized.");
    Ok(())
}

/// Get current output mode
pub fn current_mode() -> OutputMode {
    OUTPUT_CONFIG
        .get()
        .and_then(|config| config.read().ok().map(|config| config.mode()))
        .unwrap_or(OutputMode::Cli)
}
