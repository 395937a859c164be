//! easy-commit - An interactive helper for writing conventional commits.
//!
//! The library validates commit messages against the conventional commit grammar,
//! talks to git through an argument-vector transport, and drives the
//! check / validate / stage / commit / push workflow.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Message validation and parsing
//! - Repository operations
//! - The commit workflow state machine
//! - Configuration, error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    CommitWorkflow,
    // Error handling
    EasyCommitError,
    FileChange,
    FixedMessage,
    // Git operations
    GitRepo,
    GitStatus,
    GitTransport,
    // Message grammar
    MessageGrammar,
    MessageSource,
    MockTransport,
    ParsedCommitMessage,
    ProcessTransport,
    PushFailure,
    PushMode,
    RepositoryStatus,
    Reporter,
    Result,
    SilentReporter,
    ValidationResult,
    // Configuration
    WorkflowConfiguration,
    WorkflowOutcome,
};
