//! Built-in conventional commit types.
//!
//! The table is fixed data: the tag is what appears in a message header, the
//! description is only used for display (guided prompt, format help).

/// A conventional commit type tag with its human-readable description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitType {
    pub tag: &'static str,
    pub description: &'static str,
}

/// Every commit type known out of the box, in display order
pub const COMMIT_TYPES: &[CommitType] = &[
    CommitType { tag: "feat", description: "A new feature" },
    CommitType { tag: "fix", description: "A bug fix" },
    CommitType { tag: "docs", description: "Documentation only changes" },
    CommitType { tag: "style", description: "Formatting and UI styling, no logic change" },
    CommitType { tag: "refactor", description: "Code change that neither fixes a bug nor adds a feature" },
    CommitType { tag: "perf", description: "Performance improvements" },
    CommitType { tag: "test", description: "Adding or correcting tests" },
    CommitType { tag: "build", description: "Build system or external dependency changes" },
    CommitType { tag: "ci", description: "CI configuration and scripts" },
    CommitType { tag: "chore", description: "Maintenance tasks" },
    CommitType { tag: "revert", description: "Revert a previous commit" },
    CommitType { tag: "wip", description: "Work in progress, not finished yet" },
    CommitType { tag: "release", description: "Release notes and version bumps" },
    CommitType { tag: "types", description: "Changes to data types" },
    CommitType { tag: "workflow", description: "Workflow changes" },
    CommitType { tag: "dx", description: "Developer experience improvements" },
];

/// Look up a built-in commit type by tag
pub fn find_commit_type(tag: &str) -> Option<&'static CommitType> {
    COMMIT_TYPES.iter().find(|t| t.tag == tag)
}

/// Tags of all built-in commit types
pub fn default_type_tags() -> Vec<String> {
    COMMIT_TYPES.iter().map(|t| t.tag.to_string()).collect()
}
