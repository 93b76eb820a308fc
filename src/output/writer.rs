//! Low-level writing logic for display output routing

use super::config::OutputMode;
use std::io::{self, Write};

/// Write display output based on the current mode
pub fn write_output(mode: OutputMode, args: std::fmt::Arguments) -> io::Result<()> {
    match mode {
        OutputMode::Cli | OutputMode::Interactive => {
            print!("{args}");
            io::stdout().flush()
        }
        OutputMode::Quiet => Ok(()),
    }
}

/// Write display output with newline based on the current mode
pub fn writeln_output(mode: OutputMode, args: std::fmt::Arguments) -> io::Result<()> {
    match mode {
        OutputMode::Cli | OutputMode::Interactive => {
            println!("{args}");
            io::stdout().flush()
        }
        OutputMode::Quiet => Ok(()),
    }
}
