use console::style;

use crate::{display_eprintln, display_println};

pub fn print_header(title: &str) {
    display_println!("{}", style(format!("📜 {title}")).blue().bold());
    print_separator();
}

pub fn print_success(message: &str) {
    display_println!("{} {}", style("✅").green(), message);
}

pub fn print_error(message: &str) {
    display_eprintln!("{} {}", style("❌").red(), message);
}

pub fn print_warning(message: &str) {
    display_println!("{} {}", style("⚠️").yellow(), message);
}

pub fn print_info(message: &str) {
    display_println!("{} {}", style("ℹ️").blue(), message);
}

pub fn format_path(path: &str) -> String {
    style(path).dim().to_string()
}

pub fn print_separator() {
    display_println!("{}", "─".repeat(50));
}
