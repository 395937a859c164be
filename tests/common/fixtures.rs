//! Predefined repository scenarios

#![allow(dead_code)]

use super::repository::*;
use tempfile::TempDir;

/// Scenario: a committed repository with one modified and one untracked file
pub fn create_dirty_repo() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    create_file(&repo.path, "initial.txt", "modified content\n")?;
    create_file(&repo.path, "src/lib.rs", "pub fn answer() -> u32 { 42 }\n")?;

    Ok(repo)
}

/// Scenario: a dirty repository whose `origin` is an empty bare repository
pub fn create_dirty_repo_with_remote() -> anyhow::Result<(TestRepo, TempDir)> {
    let repo = create_dirty_repo()?;
    let remote = add_bare_remote(&repo)?;
    Ok((repo, remote))
}
