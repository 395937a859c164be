//! Color mapping for file change kinds.
//!
//! # Color Scheme
//! - **Modified**: Yellow
//! - **Added**: Green
//! - **Deleted**: Red
//! - **Renamed/Copied**: Blue
//! - **Untracked**: Cyan
//! - **Unmerged**: Red bold

use crate::core::git_status::{FileChange, GitStatus};
use colored::*;

/// Apply the color of `status` to `text`
pub fn colorize(status: GitStatus, text: &str) -> ColoredString {
    match status {
        GitStatus::Modified => text.yellow(),
        GitStatus::Untracked => text.cyan(),
        GitStatus::Deleted => text.red(),
        GitStatus::Added => text.green(),
        GitStatus::Renamed | GitStatus::Copied => text.blue(),
        GitStatus::TypeChanged => text.magenta(),
        GitStatus::Unmerged => text.red().bold(),
    }
}

/// Colored status code padded to two columns
pub fn get_aligned_status(status: GitStatus) -> ColoredString {
    let code = status.as_str();
    if code.len() == 2 {
        colorize(status, code)
    } else {
        colorize(status, &format!("{code} "))
    }
}

/// One line of a file listing: `  M  src/lib.rs  (modified)`
pub fn format_file_change(change: &FileChange) -> String {
    let path = change.path.display().to_string();
    format!(
        "  {} {}  {}",
        get_aligned_status(change.status),
        colorize(change.status, &path),
        format!("({})", change.status.description()).bright_black()
    )
}
