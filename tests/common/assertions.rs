//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

pub fn has_branch_info(branch: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("On branch {branch}"))
}

pub fn nothing_to_commit() -> impl Predicate<str> {
    predicates::str::contains("Nothing to commit")
}

/// Creates a predicate that checks for a file change description
pub fn has_status(status: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("({})", status))
}

pub fn invalid_message() -> impl Predicate<str> {
    predicates::str::contains("Invalid commit message")
}
