//! Commit message suggestions derived from the changed paths.
//!
//! Each changed file is classified into a commit type, the first top-level
//! directory among the changes becomes the scope, and one header is produced per
//! distinct type (at most [`MAX_SUGGESTIONS`]). Every suggestion is checked
//! against the grammar before it is offered.

use crate::core::git_status::RepositoryStatus;
use crate::core::grammar::{compose_header, MessageGrammar};
use std::path::{Component, Path};

pub const MAX_SUGGESTIONS: usize = 3;

const SOURCE_EXTENSIONS: &[&str] = &[
    "rs", "ts", "tsx", "js", "jsx", "py", "go", "java", "kt", "c", "h", "cc", "cpp", "hpp", "cs",
    "rb", "swift", "php",
];
const DOC_EXTENSIONS: &[&str] = &["md", "txt", "rst", "adoc"];
const CI_DIRECTORIES: &[&str] = &[".github", ".gitlab", ".circleci", "config"];

/// Commit type that best describes a change to `path`
pub fn classify_path(path: &Path) -> &'static str {
    let top = top_level_directory(path);
    if top.is_some_and(|dir| CI_DIRECTORIES.contains(&dir)) {
        return "ci";
    }

    if is_test_path(path) {
        return "test";
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if DOC_EXTENSIONS.contains(&extension.as_str()) {
        "docs"
    } else if SOURCE_EXTENSIONS.contains(&extension.as_str()) {
        "feat"
    } else {
        "chore"
    }
}

/// Up to three headers that fit the changes in `status`
pub fn suggest_messages(status: &RepositoryStatus, grammar: &MessageGrammar) -> Vec<String> {
    let files = status.changed_files();
    if files.is_empty() {
        return Vec::new();
    }

    let mut types: Vec<&str> = Vec::new();
    for file in &files {
        let commit_type = classify_path(file);
        if !types.contains(&commit_type) {
            types.push(commit_type);
        }
    }

    let scope = files
        .iter()
        .filter_map(|f| top_level_directory(f))
        .map(|dir| dir.trim_start_matches('.').to_ascii_lowercase())
        .find(|dir| !dir.is_empty());

    let description = match files.len() {
        1 => "update 1 file".to_string(),
        n => format!("update {n} files"),
    };

    types
        .into_iter()
        .filter(|t| grammar.allowed_types().iter().any(|allowed| allowed == t))
        .filter_map(|commit_type| {
            let scoped = compose_header(commit_type, scope.as_deref(), false, &description);
            if grammar.validate(&scoped).is_valid() {
                return Some(scoped);
            }
            let plain = compose_header(commit_type, None, false, &description);
            grammar.validate(&plain).is_valid().then_some(plain)
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// First directory component, `None` for files at the repository root
fn top_level_directory(path: &Path) -> Option<&str> {
    let mut components = path.components();
    let first = components.next()?;
    components.next()?;
    match first {
        Component::Normal(dir) => dir.to_str(),
        _ => None,
    }
}

fn is_test_path(path: &Path) -> bool {
    let in_test_dir = path.parent().is_some_and(|parent| {
        parent.components().any(|c| {
            matches!(c, Component::Normal(dir) if matches!(dir.to_str(), Some("test" | "tests" | "__tests__" | "spec")))
        })
    });

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    in_test_dir
        || stem.starts_with("test_")
        || stem.ends_with("_test")
        || stem.ends_with("_tests")
        || stem.ends_with(".test")
        || stem.ends_with(".spec")
}
