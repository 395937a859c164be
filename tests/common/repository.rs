//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories, bare remotes to push to,
//! and a preconfigured command for running the binary against them.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
    /// Isolated configuration home so the user's preferences never leak in
    pub config_home: TempDir,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The easy-commit binary, run inside this repository
    pub fn easy_commit(&self) -> anyhow::Result<Command> {
        easy_commit_in(&self.path, self.config_home.path())
    }

    /// Write a config.json for this repository's isolated configuration home
    pub fn write_config(&self, json: &str) -> anyhow::Result<()> {
        let dir = self.config_home.path().join("easy-commit");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("config.json"), json)?;
        Ok(())
    }
}

/// The easy-commit binary with a clean environment: no colors, no RUST_LOG and
/// configuration read from `config_home`
pub fn easy_commit_in(dir: &Path, config_home: &Path) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("easy-commit")?;
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env("NO_COLOR", "1")
        .env("GIT_TERMINAL_PROMPT", "0")
        .env_remove("RUST_LOG");
    Ok(cmd)
}

/// Run git in `dir` and fail the test if it exits non-zero
pub fn git(dir: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    anyhow::ensure!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Sets up a fresh git repository on branch `main`
///
/// Sets basic git configuration to avoid user prompts.
pub fn setup_test_repo() -> anyhow::Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let config_home = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init", "--quiet"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
        config_home,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file (and its parent directories) with specified content
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> anyhow::Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn git_add(repo_path: &Path, filename: &str) -> anyhow::Result<()> {
    git(repo_path, &["add", filename])?;
    Ok(())
}

pub fn git_commit(repo_path: &Path, message: &str) -> anyhow::Result<()> {
    git(repo_path, &["commit", "--quiet", "-m", message])?;
    Ok(())
}

/// Full message of the HEAD commit
pub fn head_message(repo_path: &Path) -> anyhow::Result<String> {
    Ok(git(repo_path, &["log", "-1", "--format=%B"])?.trim_end().to_string())
}

pub fn commit_count(repo_path: &Path) -> anyhow::Result<usize> {
    Ok(git(repo_path, &["rev-list", "--count", "HEAD"])?.trim().parse()?)
}

/// Create a bare repository and register it as `origin` of `repo`
pub fn add_bare_remote(repo: &TestRepo) -> anyhow::Result<TempDir> {
    let remote_dir = TempDir::new()?;
    git(remote_dir.path(), &["init", "--bare", "--quiet"])?;

    let url = remote_dir.path().to_string_lossy().into_owned();
    git(&repo.path, &["remote", "add", "origin", &url])?;
    Ok(remote_dir)
}

/// Branch names present in a (bare) remote
pub fn remote_branches(remote: &Path) -> anyhow::Result<Vec<String>> {
    Ok(git(remote, &["for-each-ref", "--format=%(refname:short)", "refs/heads"])?
        .lines()
        .map(str::to_string)
        .collect())
}
