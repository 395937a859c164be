use crate::core::{
    colors::format_file_change,
    error::{EasyCommitError, Result},
    git::GitRepo,
    git_status::{FileChange, GitStatus, RepositoryStatus},
    output::print_info,
};
use colored::*;
use std::env;

pub fn execute_status() -> Result<()> {
    let current_dir = env::current_dir()?;
    let git_repo = GitRepo::open(&current_dir);

    if !git_repo.is_repository() {
        return Err(EasyCommitError::NotInGitRepo);
    }

    let status = git_repo.get_status()?;
    if !status.is_repository {
        return Err(EasyCommitError::NotInGitRepo);
    }

    let last_commit = git_repo.last_commit().unwrap_or_else(|e| {
        log::debug!("Could not read HEAD commit: {e}");
        None
    });
    let ahead_behind = git_repo.ahead_behind().unwrap_or_else(|e| {
        log::debug!("Could not compute ahead/behind: {e}");
        None
    });

    print_header(&status, last_commit, ahead_behind);

    if !status.has_changes() {
        print_info("Nothing to commit, working tree clean");
        return Ok(());
    }

    print_changes(&status.changes);
    Ok(())
}

fn print_header(
    status: &RepositoryStatus,
    last_commit: Option<(String, String)>,
    ahead_behind: Option<(usize, usize)>,
) {
    let branch = match &status.current_branch {
        Some(branch) => branch.green().bold(),
        None => "(detached HEAD)".red().bold(),
    };

    println!();
    println!("{} {}{}", "On branch".white(), branch, format_ahead_behind(ahead_behind));

    match last_commit {
        Some((hash, subject)) => {
            println!("{} {} {}", "Last commit".white(), hash.yellow(), subject.white())
        }
        None => println!("{} {}", "Last commit".white(), "- no commits yet -".bright_black()),
    }
}

fn format_ahead_behind(counts: Option<(usize, usize)>) -> String {
    match counts {
        Some((ahead, behind)) if ahead > 0 && behind > 0 => format!(
            " {}+{}/-{}{}",
            "(".bright_black(),
            ahead.to_string().white(),
            behind.to_string().white(),
            ")".bright_black()
        ),
        Some((ahead, _)) if ahead > 0 => format!(
            " {}+{}{}",
            "(".bright_black(),
            ahead.to_string().white(),
            ")".bright_black()
        ),
        Some((_, behind)) if behind > 0 => format!(
            " {}-{}{}",
            "(".bright_black(),
            behind.to_string().white(),
            ")".bright_black()
        ),
        _ => String::new(),
    }
}

fn print_changes(changes: &[FileChange]) {
    let mut unmerged = Vec::new();
    let mut staged = Vec::new();
    let mut unstaged = Vec::new();
    let mut untracked = Vec::new();

    for change in changes {
        match change.status {
            GitStatus::Unmerged => unmerged.push(change),
            GitStatus::Untracked => untracked.push(change),
            _ if change.staged => staged.push(change),
            _ => unstaged.push(change),
        }
    }

    print_section("Unmerged paths", &unmerged);
    print_section("Changes to be committed", &staged);
    print_section("Changes not staged for commit", &unstaged);
    print_section("Untracked files", &untracked);
}

fn print_section(title: &str, changes: &[&FileChange]) {
    if changes.is_empty() {
        return;
    }

    println!("\n{}", format!("{title}:").white().bold());
    for change in changes {
        println!("{}", format_file_change(change));
    }
}
