//! Colored status output for the hook
//!
//! Uses owo-colors for terminal colors. Status lines go to stdout, warnings to
//! stderr so the build system log keeps them apart.

use owo_colors::OwoColorize;

/// Print an action header (blue, bold)
/// Example: "==> Compiling GSettings schemas..."
pub fn action(message: &str) {
    println!("{} {}", "==>".blue().bold(), message.bold());
}

/// Print a detail line (dimmed)
/// Example: "     glib-compile-schemas /usr/local/share/glib-2.0/schemas"
pub fn detail(message: &str) {
    println!("     {}", message.dimmed());
}

/// Print a success message (green)
pub fn success(message: &str) {
    println!("{} {}", "==>".green().bold(), message.green());
}

/// Print a skip message (dimmed)
pub fn skip(message: &str) {
    println!("{} {}", "==>".dimmed(), message.dimmed());
}

/// Print a warning message (yellow)
pub fn warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message.yellow());
}

/// Print an error message (red)
pub fn error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message.red());
}
