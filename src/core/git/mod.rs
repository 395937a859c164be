//! Repository gateway over the git command line.
//!
//! [`GitRepo`] exposes the version-control primitives the commit workflow needs as
//! discrete operations with typed results. Every call goes through a
//! [`GitTransport`], which runs git with an explicit argument vector: nothing is
//! ever spliced into a shell command line, so commit messages containing quotes
//! or control characters reach git untouched.
//!
//! # Implementations of [`GitTransport`]
//! - [`process::ProcessTransport`]: Spawns the real `git` binary in the working tree
//! - [`mock::MockTransport`]: Scripted responses that record every invocation
//!
//! # Failure policy
//! - [`GitRepo::is_repository`] and [`GitRepo::remote_branch_exists`] never fail;
//!   a query that cannot answer counts as `false`.
//! - Everything else returns a typed [`EasyCommitError`].

pub mod mock;
pub mod process;

pub use mock::MockTransport;
pub use process::ProcessTransport;

use crate::core::{
    error::{EasyCommitError, Result},
    git_status::{parse_porcelain, RepositoryStatus},
};
use std::fmt;

pub const DEFAULT_REMOTE: &str = "origin";

/// Captured result of one git invocation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GitOutput {
    /// Exit code, `None` when git was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// The text that explains a failure; git writes some of its errors to stdout
    pub fn error_text(&self) -> &str {
        if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Boundary between the gateway and the git process
pub trait GitTransport {
    /// Run git with `args`. Returns `Err` only when git could not be started;
    /// a non-zero exit is reported through [`GitOutput::code`].
    fn run(&self, args: &[&str]) -> Result<GitOutput>;
}

/// How a branch is pushed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushMode {
    /// First push of a branch the remote doesn't have yet; sets upstream tracking
    Publish,
    /// Ordinary push to an existing remote branch
    Update,
}

impl fmt::Display for PushMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushMode::Publish => f.write_str("publish"),
            PushMode::Update => f.write_str("push"),
        }
    }
}

pub struct GitRepo<T: GitTransport = ProcessTransport> {
    transport: T,
}

impl<T: GitTransport> GitRepo<T> {
    pub fn with_transport(transport: T) -> Self {
        GitRepo { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn git(&self, args: &[&str]) -> Result<GitOutput> {
        log::debug!("Running git {}", args.join(" "));
        let output = self.transport.run(args)?;
        log::debug!(
            "git {} exited with {:?}",
            args.first().copied().unwrap_or_default(),
            output.code
        );
        Ok(output)
    }

    /// Whether the transport's working directory is inside a git working tree
    pub fn is_repository(&self) -> bool {
        match self.git(&["rev-parse", "--is-inside-work-tree"]) {
            Ok(output) => output.is_success() && output.stdout.trim() == "true",
            Err(e) => {
                log::debug!("Repository detection failed: {e}");
                false
            }
        }
    }

    /// Fresh snapshot of the working tree
    pub fn get_status(&self) -> Result<RepositoryStatus> {
        let output = self.git(&["status", "--porcelain", "-z", "--untracked-files=all"])?;

        if !output.is_success() {
            if is_not_a_repository(&output) {
                return Ok(RepositoryStatus::not_a_repository());
            }
            return Err(EasyCommitError::git_command_failed(
                "status",
                output.error_text(),
            ));
        }

        let current_branch = match self.get_current_branch() {
            Ok(branch) => Some(branch),
            Err(EasyCommitError::DetachedHead) => None,
            Err(e) => return Err(e),
        };

        Ok(RepositoryStatus::from_changes(
            current_branch,
            parse_porcelain(&output.stdout),
        ))
    }

    /// Name of the checked-out branch; fails with [`EasyCommitError::DetachedHead`]
    /// when HEAD does not point at a branch
    pub fn get_current_branch(&self) -> Result<String> {
        let output = self.git(&["symbolic-ref", "--quiet", "--short", "HEAD"])?;

        if output.is_success() {
            let branch = output.stdout.trim();
            if !branch.is_empty() {
                return Ok(branch.to_string());
            }
        }

        if is_not_a_repository(&output) {
            return Err(EasyCommitError::NotInGitRepo);
        }

        Err(EasyCommitError::DetachedHead)
    }

    /// Stage every change in the working tree, including untracked and deleted files
    pub fn stage_all(&self) -> Result<()> {
        let output = self.git(&["add", "--all"])?;
        if !output.is_success() {
            return Err(EasyCommitError::stage_failed(output.error_text()));
        }
        Ok(())
    }

    /// Record the staged changes with `message`, passed to git as a single argument
    pub fn commit(&self, message: &str) -> Result<()> {
        let output = self.git(&["commit", "-m", message])?;
        if !output.is_success() {
            return Err(EasyCommitError::commit_failed(output.error_text()));
        }
        Ok(())
    }

    /// Whether `remote` has a branch named `branch`. Any failure to ask counts as `false`.
    pub fn remote_branch_exists(&self, branch: &str, remote: &str) -> bool {
        let reference = format!("refs/heads/{branch}");
        match self.git(&["ls-remote", "--heads", remote, &reference]) {
            Ok(output) if output.is_success() => !output.stdout.trim().is_empty(),
            Ok(output) => {
                log::debug!(
                    "ls-remote {remote} failed, treating '{branch}' as unpublished: {}",
                    output.error_text().trim()
                );
                false
            }
            Err(e) => {
                log::debug!("ls-remote {remote} could not run: {e}");
                false
            }
        }
    }

    /// Configured URL of `remote`, if any
    pub fn remote_url(&self, remote: &str) -> Option<String> {
        let output = self.git(&["remote", "get-url", remote]).ok()?;
        let url = output.stdout.trim();
        (output.is_success() && !url.is_empty()).then(|| url.to_string())
    }

    /// Decide how `branch` has to be pushed to `remote`
    pub fn plan_push(&self, remote: &str, branch: &str) -> PushMode {
        if self.remote_branch_exists(branch, remote) {
            PushMode::Update
        } else {
            PushMode::Publish
        }
    }

    /// Push HEAD to `branch` on `remote` with an already chosen mode
    pub fn push_with_mode(&self, remote: &str, branch: &str, mode: PushMode) -> Result<()> {
        let refspec = format!("HEAD:refs/heads/{branch}");
        let output = match mode {
            PushMode::Publish => self.git(&["push", "--set-upstream", remote, &refspec])?,
            PushMode::Update => self.git(&["push", remote, &refspec])?,
        };

        if !output.is_success() {
            return Err(EasyCommitError::push_failed(
                remote,
                branch,
                output.error_text(),
            ));
        }
        Ok(())
    }

    /// Push HEAD to `branch` on `remote`, publishing it with upstream tracking when
    /// the remote doesn't have it yet. Returns the mode that was used.
    pub fn push(&self, remote: &str, branch: &str) -> Result<PushMode> {
        let mode = self.plan_push(remote, branch);
        self.push_with_mode(remote, branch, mode)?;
        Ok(mode)
    }
}

fn is_not_a_repository(output: &GitOutput) -> bool {
    output.stderr.to_lowercase().contains("not a git repository")
}
