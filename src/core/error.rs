//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`EasyCommitError`] which covers every way a run of easy-commit
//! can fail. It uses `thiserror` for ergonomic error definitions and includes
//! specialized constructors for the failure scenarios of the commit workflow.
//!
//! # Public API
//! - [`EasyCommitError`]: Main error enum covering all failure modes
//! - [`PushFailure`]: Classified cause of a rejected push
//! - [`Result<T>`]: Type alias for `std::result::Result<T, EasyCommitError>`
//!
//! # Error Categories
//! - **Validation**: The commit message does not follow the grammar (the only recoverable kind)
//! - **Preconditions**: Not inside a git working tree
//! - **Local git operations**: Staging or committing failed
//! - **Remote operations**: Pushing failed, split by cause
//! - **Repository queries**: git missing, status query failed, detached HEAD
//! - **Configuration**: Preferences file could not be written

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a push was refused, derived from git's stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushFailure {
    /// Authentication or authorization problem
    Permission,
    /// Remote refused the update (non-fast-forward, hooks, protected branch)
    Rejected,
    /// Anything that could not be classified
    Unknown,
}

impl PushFailure {
    /// Classify a push failure from the captured stderr of `git push`
    pub fn classify(stderr: &str) -> Self {
        let text = stderr.to_lowercase();

        // 403 only as an HTTP status, ref and remote names may contain it
        const PERMISSION_MARKERS: [&str; 5] = [
            "permission denied",
            "authentication failed",
            "could not read username",
            "error: 403",
            "access denied",
        ];
        const REJECTED_MARKERS: [&str; 5] = [
            "[rejected]",
            "non-fast-forward",
            "fetch first",
            "failed to push some refs",
            "[remote rejected]",
        ];

        if PERMISSION_MARKERS.iter().any(|m| text.contains(m)) {
            PushFailure::Permission
        } else if REJECTED_MARKERS.iter().any(|m| text.contains(m)) {
            PushFailure::Rejected
        } else {
            PushFailure::Unknown
        }
    }
}

impl fmt::Display for PushFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PushFailure::Permission => "Permission denied",
            PushFailure::Rejected => "Push rejected by remote",
            PushFailure::Unknown => "Push failed",
        };
        f.write_str(text)
    }
}

/// Domain-specific error types for easy-commit
#[derive(Error, Debug)]
pub enum EasyCommitError {
    // Validation errors
    #[error("Invalid commit message:\n{}", format_numbered(.errors))]
    InvalidMessage { errors: Vec<String> },

    // Precondition errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    // Repository query errors
    #[error("Could not run git: {source}")]
    GitUnavailable { source: std::io::Error },

    #[error("git {command} failed: {stderr}")]
    GitCommandFailed { command: String, stderr: String },

    #[error("HEAD is detached, no branch to push")]
    DetachedHead,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    // Local transport errors
    #[error("Failed to stage changes: {stderr}")]
    StageFailed { stderr: String },

    #[error("Failed to create commit: {stderr}")]
    CommitFailed { stderr: String },

    // Remote transport errors
    #[error("{cause} while pushing '{branch}' to '{remote}': {stderr}")]
    PushFailed {
        remote: String,
        branch: String,
        cause: PushFailure,
        stderr: String,
    },

    // Configuration errors
    #[error("Could not find configuration directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to write configuration file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using EasyCommitError
pub type Result<T> = std::result::Result<T, EasyCommitError>;

fn format_numbered(errors: &[String]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| format!("  {}. {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n")
}

impl EasyCommitError {
    /// Create an invalid message error from the collected validation errors
    pub fn invalid_message(errors: Vec<String>) -> Self {
        Self::InvalidMessage { errors }
    }

    /// Create a git command failure for a repository query
    pub fn git_command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            stderr: stderr.into().trim().to_string(),
        }
    }

    /// Create a stage failure
    pub fn stage_failed(stderr: impl Into<String>) -> Self {
        Self::StageFailed {
            stderr: stderr.into().trim().to_string(),
        }
    }

    /// Create a commit failure
    pub fn commit_failed(stderr: impl Into<String>) -> Self {
        Self::CommitFailed {
            stderr: stderr.into().trim().to_string(),
        }
    }

    /// Create a push failure, classifying the cause from stderr
    pub fn push_failed(
        remote: impl Into<String>,
        branch: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        let stderr = stderr.into().trim().to_string();
        Self::PushFailed {
            remote: remote.into(),
            branch: branch.into(),
            cause: PushFailure::classify(&stderr),
            stderr,
        }
    }

    /// Create a configuration write failure
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Actionable suggestion shown below the error message
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidMessage { .. } => {
                Some("Use the format type(scope): description, e.g. 'feat(auth): add login'")
            }
            Self::NotInGitRepo => Some("Run this command inside a git working tree"),
            Self::GitUnavailable { .. } => Some("Make sure git is installed and on your PATH"),
            Self::DetachedHead => Some("Check out a branch, or pass --branch to choose the push target"),
            Self::StageFailed { .. } => Some("Run 'git add' manually to see what is blocking the index"),
            Self::CommitFailed { .. } => {
                Some("Make sure there are staged changes and that git user.name/user.email are set")
            }
            Self::PushFailed { cause, .. } => Some(match cause {
                PushFailure::Permission => {
                    "Check your credentials or SSH key for this remote; the commit is kept locally"
                }
                PushFailure::Rejected => {
                    "Pull the latest changes (git pull --rebase) and push again; the commit is kept locally"
                }
                PushFailure::Unknown => {
                    "Run 'git push' manually to investigate; the commit is kept locally"
                }
            }),
            _ => None,
        }
    }
}
