//! The commit workflow: check, acquire message, validate, stage, commit, push.
//!
//! [`CommitWorkflow`] drives one run as a linear state machine over a
//! [`GitRepo`]. Steps never retry on their own and never roll back: once a commit
//! exists it is kept even if the push that follows fails.
//!
//! Input and output are injected. A [`MessageSource`] supplies the raw message
//! (prompt, flag, script) and a [`Reporter`] receives progress for display.
//!
//! ```text
//! Idle -> PreconditionsChecked -> MessageAcquired -> MessageValidated
//!      -> Staged -> Committed -> Pushed
//! ```
//! Any fatal error moves the workflow to [`WorkflowState::Failed`].

use crate::core::config::WorkflowConfiguration;
use crate::core::error::{EasyCommitError, Result};
use crate::core::git::{GitRepo, GitTransport, PushMode, DEFAULT_REMOTE};
use crate::core::git_status::RepositoryStatus;
use crate::core::grammar::{MessageGrammar, ValidationResult};
use std::fmt;

/// Number of messages accepted before validation gives up
pub const MAX_MESSAGE_ATTEMPTS: usize = 2;

/// The step a workflow failed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Preconditions,
    MessageAcquisition,
    Validation,
    Staging,
    Commit,
    Push,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Preconditions => "preconditions",
            Step::MessageAcquisition => "message acquisition",
            Step::Validation => "validation",
            Step::Staging => "staging",
            Step::Commit => "commit",
            Step::Push => "push",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    PreconditionsChecked,
    MessageAcquired,
    MessageValidated,
    Staged,
    Committed,
    Pushed,
    Failed { step: Step, reason: String },
}

impl WorkflowState {
    /// The step that runs next from this state
    fn next_step(&self) -> Step {
        match self {
            WorkflowState::Idle => Step::Preconditions,
            WorkflowState::PreconditionsChecked => Step::MessageAcquisition,
            WorkflowState::MessageAcquired => Step::Validation,
            WorkflowState::MessageValidated => Step::Staging,
            WorkflowState::Staged => Step::Commit,
            WorkflowState::Committed | WorkflowState::Pushed => Step::Push,
            WorkflowState::Failed { step, .. } => *step,
        }
    }
}

/// How a run ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// The working tree was clean
    NothingToCommit,
    /// The user aborted before anything was staged
    Cancelled,
    /// Committed locally, pushing disabled
    Committed { message: String },
    Pushed {
        message: String,
        remote: String,
        branch: String,
        mode: PushMode,
    },
}

/// What the workflow knows when it asks for a message
#[derive(Debug, Clone, Copy)]
pub struct MessageRequest<'a> {
    pub status: &'a RepositoryStatus,
    /// 1-based
    pub attempt: usize,
    /// Validation result of the previous attempt, if it was rejected
    pub rejected: Option<&'a ValidationResult>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageReply {
    Provided(String),
    /// The user aborted (EOF, empty answer, declined)
    Cancelled,
    /// No further attempt after a rejected message
    Abandoned,
}

/// Supplies raw commit messages to the workflow
pub trait MessageSource {
    fn next_message(&mut self, request: &MessageRequest<'_>) -> Result<MessageReply>;

    /// Last chance to back out once the message is valid
    fn confirm(&mut self, _message: &str) -> Result<bool> {
        Ok(true)
    }
}

/// A single message given up front, with no retry
#[derive(Debug, Clone)]
pub struct FixedMessage {
    message: Option<String>,
}

impl FixedMessage {
    pub fn new(message: impl Into<String>) -> Self {
        FixedMessage {
            message: Some(message.into()),
        }
    }
}

impl MessageSource for FixedMessage {
    fn next_message(&mut self, _request: &MessageRequest<'_>) -> Result<MessageReply> {
        Ok(self
            .message
            .take()
            .map(MessageReply::Provided)
            .unwrap_or(MessageReply::Abandoned))
    }
}

/// Receives progress of a run for display
pub trait Reporter {
    fn status(&self, _status: &RepositoryStatus) {}
    fn step(&self, _message: &str) {}
    fn done(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}

pub struct CommitWorkflow<'a, T: GitTransport> {
    repo: &'a GitRepo<T>,
    config: WorkflowConfiguration,
    grammar: MessageGrammar,
    reporter: &'a dyn Reporter,
    remote: String,
    branch_override: Option<String>,
    state: WorkflowState,
}

impl<'a, T: GitTransport> CommitWorkflow<'a, T> {
    pub fn new(
        repo: &'a GitRepo<T>,
        config: WorkflowConfiguration,
        reporter: &'a dyn Reporter,
    ) -> Self {
        let grammar = MessageGrammar::new(&config);
        CommitWorkflow {
            repo,
            config,
            grammar,
            reporter,
            remote: DEFAULT_REMOTE.to_string(),
            branch_override: None,
            state: WorkflowState::Idle,
        }
    }

    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    /// Push to `branch` instead of the checked-out branch
    pub fn with_branch(mut self, branch: Option<String>) -> Self {
        self.branch_override = branch;
        self
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn config(&self) -> &WorkflowConfiguration {
        &self.config
    }

    /// Run the workflow to completion
    pub fn run(&mut self, source: &mut dyn MessageSource) -> Result<WorkflowOutcome> {
        let result = self.drive(source);
        if let Err(e) = &result {
            let step = self.state.next_step();
            log::info!("Workflow failed during {step}: {e}");
            self.state = WorkflowState::Failed {
                step,
                reason: e.to_string(),
            };
        }
        result
    }

    fn transition(&mut self, next: WorkflowState) {
        log::info!("Workflow {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn drive(&mut self, source: &mut dyn MessageSource) -> Result<WorkflowOutcome> {
        let Some((status, push_branch)) = self.check_preconditions()? else {
            return Ok(WorkflowOutcome::NothingToCommit);
        };
        self.transition(WorkflowState::PreconditionsChecked);

        let Some(message) = self.acquire_message(source, &status)? else {
            return Ok(WorkflowOutcome::Cancelled);
        };
        if !source.confirm(&message)? {
            log::info!("Commit declined at confirmation");
            return Ok(WorkflowOutcome::Cancelled);
        }
        self.transition(WorkflowState::MessageValidated);

        if self.config.stage_all_files {
            self.reporter.step("Staging all changes");
            self.repo.stage_all()?;
        } else {
            log::debug!("Staging disabled, committing the index as is");
        }
        self.transition(WorkflowState::Staged);

        self.reporter.step("Creating commit");
        self.repo.commit(&message)?;
        self.transition(WorkflowState::Committed);
        self.reporter.done(&format!("Committed: {}", header_of(&message)));

        let Some(branch) = push_branch else {
            return Ok(WorkflowOutcome::Committed { message });
        };

        let mode = self.repo.plan_push(&self.remote, &branch);
        self.reporter.step(&match mode {
            PushMode::Publish => format!(
                "Publishing new branch '{branch}' to '{}' with upstream tracking",
                self.remote
            ),
            PushMode::Update => format!("Pushing '{branch}' to '{}'", self.remote),
        });
        self.repo.push_with_mode(&self.remote, &branch, mode)?;
        self.transition(WorkflowState::Pushed);
        self.reporter
            .done(&format!("Pushed '{branch}' to '{}'", self.remote));

        Ok(WorkflowOutcome::Pushed {
            message,
            remote: self.remote.clone(),
            branch,
            mode,
        })
    }

    /// Returns `None` when there is nothing to commit, otherwise the snapshot and
    /// the branch to push (when pushing is enabled)
    fn check_preconditions(&mut self) -> Result<Option<(RepositoryStatus, Option<String>)>> {
        if !self.repo.is_repository() {
            return Err(EasyCommitError::NotInGitRepo);
        }

        let status = self.repo.get_status()?;
        if !status.is_repository {
            return Err(EasyCommitError::NotInGitRepo);
        }
        self.reporter.status(&status);

        if !status.has_changes() {
            log::info!("Working tree clean, nothing to commit");
            return Ok(None);
        }

        let push_branch = if self.config.push_after_commit {
            let branch = self
                .branch_override
                .clone()
                .or_else(|| status.current_branch.clone())
                .ok_or(EasyCommitError::DetachedHead)?;

            if self.repo.remote_url(&self.remote).is_none() {
                self.reporter.warn(&format!(
                    "Remote '{}' is not configured, the push will probably fail",
                    self.remote
                ));
            }
            Some(branch)
        } else {
            None
        };

        Ok(Some((status, push_branch)))
    }

    /// Ask for messages until one is valid. `None` means the user cancelled.
    fn acquire_message(
        &mut self,
        source: &mut dyn MessageSource,
        status: &RepositoryStatus,
    ) -> Result<Option<String>> {
        let mut rejected: Option<ValidationResult> = None;

        for attempt in 1..=MAX_MESSAGE_ATTEMPTS {
            let request = MessageRequest {
                status,
                attempt,
                rejected: rejected.as_ref(),
            };

            let raw = match source.next_message(&request)? {
                MessageReply::Provided(raw) => raw,
                MessageReply::Cancelled => {
                    log::info!("Message entry cancelled");
                    return Ok(None);
                }
                MessageReply::Abandoned => {
                    return match rejected {
                        Some(result) => Err(EasyCommitError::invalid_message(
                            result.error_messages(),
                        )),
                        None => Ok(None),
                    };
                }
            };
            self.transition(WorkflowState::MessageAcquired);

            let message = raw.trim().to_string();
            let result = self.grammar.validate(&message);
            if result.is_valid() {
                return Ok(Some(message));
            }

            log::info!(
                "Attempt {attempt} rejected with {} error(s)",
                result.errors.len()
            );
            rejected = Some(result);
        }

        let errors = rejected.map(|r| r.error_messages()).unwrap_or_default();
        Err(EasyCommitError::invalid_message(errors))
    }
}

fn header_of(message: &str) -> &str {
    message.lines().next().unwrap_or(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::git::{GitOutput, MockTransport};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned replies and remembers what it was asked
    struct ScriptedSource {
        replies: VecDeque<MessageReply>,
        confirm: bool,
        requests: Vec<(usize, bool)>,
    }

    impl ScriptedSource {
        fn new(replies: Vec<MessageReply>) -> Self {
            ScriptedSource {
                replies: replies.into(),
                confirm: true,
                requests: Vec::new(),
            }
        }

        fn messages(messages: &[&str]) -> Self {
            Self::new(
                messages
                    .iter()
                    .map(|m| MessageReply::Provided(m.to_string()))
                    .collect(),
            )
        }
    }

    impl MessageSource for ScriptedSource {
        fn next_message(&mut self, request: &MessageRequest<'_>) -> Result<MessageReply> {
            self.requests
                .push((request.attempt, request.rejected.is_some()));
            Ok(self.replies.pop_front().unwrap_or(MessageReply::Cancelled))
        }

        fn confirm(&mut self, _message: &str) -> Result<bool> {
            Ok(self.confirm)
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        warnings: RefCell<Vec<String>>,
        done: RefCell<Vec<String>>,
    }

    impl Reporter for RecordingReporter {
        fn warn(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }

        fn done(&self, message: &str) {
            self.done.borrow_mut().push(message.to_string());
        }
    }

    fn dirty_repo() -> GitRepo<MockTransport> {
        GitRepo::with_transport(MockTransport::repository("main", " M src/lib.rs\0"))
    }

    fn mutations(repo: &GitRepo<MockTransport>) -> (usize, usize, usize) {
        let t = repo.transport();
        (t.count(&["add"]), t.count(&["commit"]), t.count(&["push"]))
    }

    #[test]
    fn test_clean_tree_is_nothing_to_commit() -> Result<()> {
        let repo = GitRepo::with_transport(MockTransport::repository("main", ""));
        let mut source = ScriptedSource::messages(&["feat: add x"]);

        let outcome =
            CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter)
                .run(&mut source)?;

        assert_eq!(outcome, WorkflowOutcome::NothingToCommit);
        assert_eq!(mutations(&repo), (0, 0, 0));
        assert!(source.requests.is_empty());
        Ok(())
    }

    #[test]
    fn test_not_a_repository_fails_preconditions() {
        let repo = GitRepo::with_transport(MockTransport::new().fail(
            &["rev-parse"],
            128,
            "fatal: not a git repository",
        ));
        let mut workflow =
            CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter);

        let err = workflow
            .run(&mut ScriptedSource::messages(&["feat: add x"]))
            .unwrap_err();

        assert!(matches!(err, EasyCommitError::NotInGitRepo));
        assert!(matches!(
            workflow.state(),
            WorkflowState::Failed {
                step: Step::Preconditions,
                ..
            }
        ));
        assert_eq!(mutations(&repo), (0, 0, 0));
    }

    #[test]
    fn test_full_run_publishes_new_branch() -> Result<()> {
        let repo = GitRepo::with_transport(MockTransport::repository("feature-x", "?? new.rs\0"));
        let mut workflow =
            CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter);

        let outcome = workflow.run(&mut ScriptedSource::messages(&["feat: add x"]))?;

        assert_eq!(
            outcome,
            WorkflowOutcome::Pushed {
                message: "feat: add x".to_string(),
                remote: "origin".to_string(),
                branch: "feature-x".to_string(),
                mode: PushMode::Publish,
            }
        );
        assert_eq!(workflow.state(), &WorkflowState::Pushed);

        let calls = repo.transport().calls();
        let position = |prefix: &[&str]| {
            calls
                .iter()
                .position(|c| c.iter().map(String::as_str).take(prefix.len()).eq(prefix.iter().copied()))
                .unwrap()
        };
        assert!(position(&["add", "--all"]) < position(&["commit"]));
        assert!(position(&["commit"]) < position(&["ls-remote"]));
        assert!(repo
            .transport()
            .invoked(&["push", "--set-upstream", "origin", "HEAD:refs/heads/feature-x"]));
        Ok(())
    }

    #[test]
    fn test_existing_remote_branch_gets_ordinary_push() -> Result<()> {
        let repo = GitRepo::with_transport(
            MockTransport::repository("main", " M a.rs\0")
                .respond(&["ls-remote"], GitOutput::success("abc123\trefs/heads/main\n")),
        );

        let outcome = CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter)
            .run(&mut ScriptedSource::messages(&["fix(auth): block invalid token"]))?;

        assert!(matches!(
            outcome,
            WorkflowOutcome::Pushed {
                mode: PushMode::Update,
                ..
            }
        ));
        assert!(repo
            .transport()
            .invoked(&["push", "origin", "HEAD:refs/heads/main"]));
        assert_eq!(repo.transport().count(&["push", "--set-upstream"]), 0);
        Ok(())
    }

    #[test]
    fn test_stage_failure_stops_before_commit() {
        let repo = GitRepo::with_transport(
            MockTransport::repository("main", " M a.rs\0").fail(&["add"], 128, "fatal: index.lock"),
        );
        let mut workflow =
            CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter);

        let err = workflow
            .run(&mut ScriptedSource::messages(&["feat: add x"]))
            .unwrap_err();

        assert!(matches!(err, EasyCommitError::StageFailed { .. }));
        assert_eq!(mutations(&repo), (1, 0, 0));
        assert!(matches!(
            workflow.state(),
            WorkflowState::Failed {
                step: Step::Staging,
                ..
            }
        ));
    }

    struct BrokenConfirmation;

    impl MessageSource for BrokenConfirmation {
        fn next_message(&mut self, _request: &MessageRequest<'_>) -> Result<MessageReply> {
            Ok(MessageReply::Provided("feat: add x".to_string()))
        }

        fn confirm(&mut self, _message: &str) -> Result<bool> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed").into())
        }
    }

    #[test]
    fn test_confirmation_error_fails_validation_step() {
        let repo = dirty_repo();
        let mut workflow =
            CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter);

        assert!(workflow.run(&mut BrokenConfirmation).is_err());
        assert_eq!(mutations(&repo), (0, 0, 0));
        assert!(matches!(
            workflow.state(),
            WorkflowState::Failed {
                step: Step::Validation,
                ..
            }
        ));
    }

    #[test]
    fn test_commit_failure_stops_before_push() {
        let repo = GitRepo::with_transport(
            MockTransport::repository("main", " M a.rs\0").fail(&["commit"], 1, "hook failed"),
        );

        let err = CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter)
            .run(&mut ScriptedSource::messages(&["feat: add x"]))
            .unwrap_err();

        assert!(matches!(err, EasyCommitError::CommitFailed { .. }));
        assert_eq!(mutations(&repo), (1, 1, 0));
    }

    #[test]
    fn test_push_failure_keeps_commit() {
        let repo = GitRepo::with_transport(
            MockTransport::repository("main", " M a.rs\0")
                .fail(&["push"], 128, "git@example.com: Permission denied (publickey)."),
        );
        let mut workflow =
            CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter);

        let err = workflow
            .run(&mut ScriptedSource::messages(&["feat: add x"]))
            .unwrap_err();

        assert!(err.to_string().starts_with("Permission denied"));
        assert!(matches!(
            workflow.state(),
            WorkflowState::Failed {
                step: Step::Push,
                ..
            }
        ));
        // no reset or revert after a failed push
        assert_eq!(repo.transport().count(&["reset"]), 0);
        assert_eq!(repo.transport().count(&["revert"]), 0);
    }

    #[test]
    fn test_invalid_message_is_retried_once() -> Result<()> {
        let repo = dirty_repo();
        let mut source = ScriptedSource::messages(&["Feat: Add Thing.", "feat: add thing"]);

        let outcome = CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter)
            .run(&mut source)?;

        assert!(matches!(outcome, WorkflowOutcome::Pushed { .. }));
        assert_eq!(source.requests, vec![(1, false), (2, true)]);
        assert!(repo
            .transport()
            .invoked(&["commit", "-m", "feat: add thing"]));
        Ok(())
    }

    #[test]
    fn test_invalid_message_twice_fails_without_staging() {
        let repo = dirty_repo();
        let mut source = ScriptedSource::messages(&["bad message", "still bad"]);
        let mut workflow =
            CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter);

        let err = workflow.run(&mut source).unwrap_err();

        assert!(matches!(err, EasyCommitError::InvalidMessage { .. }));
        assert_eq!(source.requests.len(), MAX_MESSAGE_ATTEMPTS);
        assert_eq!(mutations(&repo), (0, 0, 0));
        assert!(matches!(
            workflow.state(),
            WorkflowState::Failed {
                step: Step::Validation,
                ..
            }
        ));
    }

    #[test]
    fn test_fixed_message_is_not_retried() {
        let repo = dirty_repo();
        let err = CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter)
            .run(&mut FixedMessage::new("Feat: Add Thing."))
            .unwrap_err();

        match err {
            EasyCommitError::InvalidMessage { errors } => {
                assert!(errors.iter().any(|e| e.contains("lowercase")));
                assert!(errors.iter().any(|e| e.contains("period")));
            }
            other => panic!("expected invalid message, got {other:?}"),
        }
        assert_eq!(mutations(&repo), (0, 0, 0));
    }

    #[test]
    fn test_cancel_is_not_an_error() -> Result<()> {
        let repo = dirty_repo();
        let outcome = CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter)
            .run(&mut ScriptedSource::new(vec![MessageReply::Cancelled]))?;

        assert_eq!(outcome, WorkflowOutcome::Cancelled);
        assert_eq!(mutations(&repo), (0, 0, 0));
        Ok(())
    }

    #[test]
    fn test_declined_confirmation_cancels() -> Result<()> {
        let repo = dirty_repo();
        let mut source = ScriptedSource::messages(&["feat: add x"]);
        source.confirm = false;

        let outcome = CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter)
            .run(&mut source)?;

        assert_eq!(outcome, WorkflowOutcome::Cancelled);
        assert_eq!(mutations(&repo), (0, 0, 0));
        Ok(())
    }

    #[test]
    fn test_no_push_stops_at_committed() -> Result<()> {
        let repo = dirty_repo();
        let config = WorkflowConfiguration::default().with_overrides(true, false);
        let mut workflow = CommitWorkflow::new(&repo, config, &SilentReporter);

        let outcome = workflow.run(&mut ScriptedSource::messages(&["feat: add x"]))?;

        assert_eq!(
            outcome,
            WorkflowOutcome::Committed {
                message: "feat: add x".to_string()
            }
        );
        assert_eq!(workflow.state(), &WorkflowState::Committed);
        assert_eq!(mutations(&repo), (1, 1, 0));
        assert_eq!(repo.transport().count(&["ls-remote"]), 0);
        Ok(())
    }

    #[test]
    fn test_no_add_skips_staging() -> Result<()> {
        let repo = dirty_repo();
        let config = WorkflowConfiguration::default().with_overrides(true, true);

        CommitWorkflow::new(&repo, config, &SilentReporter)
            .run(&mut ScriptedSource::messages(&["feat: add x"]))?;

        assert_eq!(mutations(&repo), (0, 1, 0));
        Ok(())
    }

    #[test]
    fn test_detached_head_fails_before_mutation() {
        let repo = GitRepo::with_transport(
            MockTransport::repository("main", " M a.rs\0").fail(&["symbolic-ref"], 1, ""),
        );

        let err = CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter)
            .run(&mut ScriptedSource::messages(&["feat: add x"]))
            .unwrap_err();

        assert!(matches!(err, EasyCommitError::DetachedHead));
        assert_eq!(mutations(&repo), (0, 0, 0));
    }

    #[test]
    fn test_branch_override_on_detached_head() -> Result<()> {
        let repo = GitRepo::with_transport(
            MockTransport::repository("main", " M a.rs\0").fail(&["symbolic-ref"], 1, ""),
        );

        let outcome = CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &SilentReporter)
            .with_remote("upstream")
            .with_branch(Some("hotfix".to_string()))
            .run(&mut ScriptedSource::messages(&["fix: patch release"]))?;

        assert!(matches!(
            outcome,
            WorkflowOutcome::Pushed { ref remote, ref branch, .. } if remote == "upstream" && branch == "hotfix"
        ));
        assert!(repo
            .transport()
            .invoked(&["push", "--set-upstream", "upstream", "HEAD:refs/heads/hotfix"]));
        Ok(())
    }

    #[test]
    fn test_missing_remote_warns_but_continues() -> Result<()> {
        let repo = GitRepo::with_transport(
            MockTransport::repository("main", " M a.rs\0")
                .fail(&["remote", "get-url"], 2, "error: No such remote 'origin'"),
        );
        let reporter = RecordingReporter::default();

        CommitWorkflow::new(&repo, WorkflowConfiguration::default(), &reporter)
            .run(&mut ScriptedSource::messages(&["feat: add x"]))?;

        assert_eq!(reporter.warnings.borrow().len(), 1);
        assert_eq!(reporter.done.borrow().len(), 2);
        Ok(())
    }
}
