use super::{GitOutput, GitRepo, GitTransport};
use crate::core::error::{EasyCommitError, Result};
use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs the system `git` binary inside a working tree
#[derive(Debug, Clone)]
pub struct ProcessTransport {
    workdir: PathBuf,
}

impl ProcessTransport {
    pub fn new<P: AsRef<Path>>(workdir: P) -> Self {
        ProcessTransport {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    /// Use the root of the working tree containing `path`, or `path` itself when
    /// it isn't inside one
    pub fn discover<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let workdir = Repository::discover(path)
            .ok()
            .and_then(|repo| repo.workdir().map(Path::to_path_buf))
            .unwrap_or_else(|| path.to_path_buf());
        Self::new(workdir)
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl GitTransport for ProcessTransport {
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| EasyCommitError::GitUnavailable { source })?;

        Ok(GitOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl GitRepo<ProcessTransport> {
    /// Gateway for the working tree containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        GitRepo::with_transport(ProcessTransport::discover(path))
    }

    pub fn workdir(&self) -> &Path {
        self.transport().workdir()
    }

    /// Short hash and subject of the HEAD commit, `None` before the first commit
    pub fn last_commit(&self) -> Result<Option<(String, String)>> {
        let repo = Repository::open(self.workdir())?;
        let head = match repo.head() {
            Ok(head) => head,
            Err(_) => return Ok(None),
        };
        let Some(oid) = head.target() else {
            return Ok(None);
        };

        let commit = repo.find_commit(oid)?;
        let short_hash = oid.to_string()[..7].to_string();
        let subject = commit.summary().unwrap_or("").to_string();
        Ok(Some((short_hash, subject)))
    }

    /// Commits ahead of and behind the upstream of the current branch, if it has one
    pub fn ahead_behind(&self) -> Result<Option<(usize, usize)>> {
        let repo = Repository::open(self.workdir())?;
        let head = match repo.head() {
            Ok(head) => head,
            Err(_) => return Ok(None),
        };
        let (Some(local_oid), Some(branch_name)) = (head.target(), head.shorthand()) else {
            return Ok(None);
        };

        let upstream = match repo
            .find_branch(branch_name, git2::BranchType::Local)
            .and_then(|branch| branch.upstream())
        {
            Ok(upstream) => upstream,
            Err(_) => return Ok(None),
        };
        let Some(upstream_oid) = upstream.get().target() else {
            return Ok(None);
        };

        match repo.graph_ahead_behind(local_oid, upstream_oid) {
            Ok(counts) => Ok(Some(counts)),
            Err(_) => Ok(None),
        }
    }
}
