//! Reading the tail of the application log

use std::fs;
use std::path::Path;

/// Returned instead of log content when the log file does not exist
pub const LOG_NOT_FOUND: &str = "Log file not found.";

pub const DEFAULT_TAIL_LINES: usize = 500;

/// Return the last `max_lines` lines of the log, newlines preserved.
///
/// Never fails: a missing file yields [`LOG_NOT_FOUND`] and a read error
/// yields a description of that error.
pub fn read_log_content<P: AsRef<Path>>(log_path: P, max_lines: usize) -> String {
    let log_path = log_path.as_ref();
    if !log_path.exists() {
        return LOG_NOT_FOUND.to_string();
    }

    match fs::read_to_string(log_path) {
        Ok(content) => tail_lines(&content, max_lines).to_string(),
        Err(err) => format!("Failed to read log file: {err}"),
    }
}

fn tail_lines(content: &str, max_lines: usize) -> &str {
    if max_lines == 0 {
        return "";
    }

    // Byte offset just past the newline that precedes the wanted lines
    let body = content.strip_suffix('\n').unwrap_or(content);
    let start = body
        .rmatch_indices('\n')
        .nth(max_lines - 1)
        .map(|(idx, _)| idx + 1)
        .unwrap_or(0);

    &content[start..]
}
