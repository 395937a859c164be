//! Core functionality for easy-commit.
//!
//! This module provides the message grammar, the repository gateway, the commit
//! workflow and the configuration, error handling and console plumbing around them.

pub mod colors;
pub mod commit_type;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod git_status;
pub mod grammar;
pub mod output;
pub mod prompt;
pub mod suggest;
pub mod workflow;

// === Error handling ===
pub use error::{EasyCommitError, PushFailure, Result};

// === Message grammar ===
// Validation and parsing of `type(scope): description` headers
pub use commit_type::{CommitType, COMMIT_TYPES};
pub use grammar::{MessageError, MessageGrammar, ParsedCommitMessage, ValidationResult};

// === Git operations ===
// Gateway over the git command line and the transports it runs on
pub use git::{GitOutput, GitRepo, GitTransport, MockTransport, ProcessTransport, PushMode};
pub use git_status::{FileChange, GitStatus, RepositoryStatus};

// === Workflow ===
pub use workflow::{
    CommitWorkflow, FixedMessage, MessageReply, MessageRequest, MessageSource, Reporter,
    SilentReporter, WorkflowOutcome, WorkflowState,
};

// === Configuration ===
pub use config::WorkflowConfiguration;

// === Output formatting ===
pub use output::{
    print_error, print_error_with_hint, print_info, print_section_header, print_step,
    print_success, print_warning,
};
