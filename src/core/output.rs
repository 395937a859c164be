//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, yellow for warnings, green for success
//! - **Standardized spacing**: Newline before each block of output
//! - **Errors on stderr**: Everything else goes to stdout

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Prints an error followed by an optional actionable hint
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// → <hint>
///
/// ```
pub fn print_error_with_hint(message: &str, hint: Option<&str>) {
    print_error(message);
    if let Some(hint) = hint {
        eprintln!("{} {}\n", "→".yellow(), hint.bright_black());
    }
}

/// Formats and prints a warning, non-fatal
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.yellow());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// One line of progress while a step runs
pub fn print_step(message: &str) {
    println!("{} {}", "→".blue(), message);
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}
