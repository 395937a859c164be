//! Repository status snapshot and porcelain parsing.
//!
//! This module turns the output of `git status --porcelain -z` into a
//! [`RepositoryStatus`]: the current branch plus the sets of staged and unstaged
//! paths. A snapshot is never cached; callers query the gateway again whenever
//! they need fresh state.
//!
//! # Public API
//! - [`GitStatus`]: Per-file change kind, parsed from one porcelain status letter
//! - [`FileChange`]: One changed path with its kind and whether it is staged
//! - [`RepositoryStatus`]: The full snapshot
//! - [`parse_porcelain`]: Parser for NUL-separated porcelain v1 output

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of change for a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitStatus {
    /// Modified file (M)
    Modified,
    /// Added/new file in index (A)
    Added,
    /// Deleted file (D)
    Deleted,
    /// Renamed file (R)
    Renamed,
    /// Copied file (C)
    Copied,
    /// Type changed (T)
    TypeChanged,
    /// Untracked file (??)
    Untracked,
    /// Unmerged/conflicted file (UU)
    Unmerged,
}

impl GitStatus {
    /// Convert one porcelain status letter into a change kind
    pub fn from_porcelain(code: char) -> Option<GitStatus> {
        match code {
            'M' => Some(GitStatus::Modified),
            'A' => Some(GitStatus::Added),
            'D' => Some(GitStatus::Deleted),
            'R' => Some(GitStatus::Renamed),
            'C' => Some(GitStatus::Copied),
            'T' => Some(GitStatus::TypeChanged),
            '?' => Some(GitStatus::Untracked),
            'U' => Some(GitStatus::Unmerged),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GitStatus::Modified => "M",
            GitStatus::Added => "A",
            GitStatus::Deleted => "D",
            GitStatus::Renamed => "R",
            GitStatus::Copied => "C",
            GitStatus::TypeChanged => "T",
            GitStatus::Untracked => "??",
            GitStatus::Unmerged => "UU",
        }
    }

    /// Get human-readable description for status
    pub fn description(&self) -> &'static str {
        match self {
            GitStatus::Modified => "modified",
            GitStatus::Added => "new",
            GitStatus::Deleted => "deleted",
            GitStatus::Renamed => "renamed",
            GitStatus::Copied => "copied",
            GitStatus::TypeChanged => "type changed",
            GitStatus::Untracked => "untracked",
            GitStatus::Unmerged => "both modified",
        }
    }
}

impl fmt::Display for GitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub status: GitStatus,
    pub staged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepositoryStatus {
    pub is_repository: bool,
    /// `None` when HEAD is detached
    pub current_branch: Option<String>,
    pub staged_files: BTreeSet<PathBuf>,
    pub unstaged_files: BTreeSet<PathBuf>,
    pub changes: Vec<FileChange>,
}

impl RepositoryStatus {
    pub fn not_a_repository() -> Self {
        Self::default()
    }

    /// Build a snapshot from parsed porcelain entries
    pub fn from_changes(current_branch: Option<String>, changes: Vec<FileChange>) -> Self {
        let staged_files = changes
            .iter()
            .filter(|c| c.staged)
            .map(|c| c.path.clone())
            .collect();
        let unstaged_files = changes
            .iter()
            .filter(|c| !c.staged)
            .map(|c| c.path.clone())
            .collect();

        Self {
            is_repository: true,
            current_branch,
            staged_files,
            unstaged_files,
            changes,
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.staged_files.is_empty() || !self.unstaged_files.is_empty()
    }

    /// Every changed path, staged or not
    pub fn changed_files(&self) -> BTreeSet<&Path> {
        self.staged_files
            .iter()
            .chain(self.unstaged_files.iter())
            .map(PathBuf::as_path)
            .collect()
    }
}

/// Parse `git status --porcelain -z` output into file changes.
///
/// A path can appear twice, once staged and once unstaged, when it has changes
/// in both the index and the working tree.
pub fn parse_porcelain(output: &str) -> Vec<FileChange> {
    let mut changes = Vec::new();
    let mut fields = output.split('\0').filter(|f| !f.is_empty());

    while let Some(entry) = fields.next() {
        let mut codes = entry.chars();
        let (Some(x), Some(y)) = (codes.next(), codes.next()) else {
            log::debug!("Skipping malformed porcelain entry: {entry:?}");
            continue;
        };
        let Some(path) = entry.get(3..).filter(|p| !p.is_empty()) else {
            log::debug!("Skipping porcelain entry without path: {entry:?}");
            continue;
        };
        let path = PathBuf::from(path);

        // Renames and copies carry the original path as the next field
        if matches!(x, 'R' | 'C') || matches!(y, 'R' | 'C') {
            fields.next();
        }

        if x == '?' {
            changes.push(FileChange {
                path,
                status: GitStatus::Untracked,
                staged: false,
            });
            continue;
        }

        if x == 'U' || y == 'U' || (x == 'A' && y == 'A') || (x == 'D' && y == 'D') {
            changes.push(FileChange {
                path,
                status: GitStatus::Unmerged,
                staged: false,
            });
            continue;
        }

        if let Some(status) = GitStatus::from_porcelain(x) {
            changes.push(FileChange {
                path: path.clone(),
                status,
                staged: true,
            });
        }

        if let Some(status) = GitStatus::from_porcelain(y) {
            changes.push(FileChange {
                path,
                status,
                staged: false,
            });
        }
    }

    changes
}
