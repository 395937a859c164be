use crate::core::{
    commit_type::find_commit_type,
    config::WorkflowConfiguration,
    error::Result,
    git::GitRepo,
    git_status::RepositoryStatus,
    grammar::{compose_header, MessageGrammar},
    output::{print_info, print_step, print_success, print_warning},
    prompt::Prompter,
    suggest::suggest_messages,
    workflow::{
        CommitWorkflow, FixedMessage, MessageReply, MessageRequest, MessageSource, Reporter,
        WorkflowOutcome,
    },
};
use colored::*;
use std::env;
use std::io::{BufRead, Write};

/// Flags of the `commit` subcommand
#[derive(Debug, Clone, Default)]
pub struct CommitOptions {
    pub message: Option<String>,
    pub interactive: bool,
    pub no_push: bool,
    pub no_add: bool,
    pub remote: String,
    pub branch: Option<String>,
    pub yes: bool,
}

pub fn execute_commit(options: CommitOptions) -> Result<()> {
    let config = WorkflowConfiguration::load().with_overrides(options.no_push, options.no_add);
    let grammar = MessageGrammar::new(&config);

    let current_dir = env::current_dir()?;
    let git_repo = GitRepo::open(&current_dir);
    let reporter = ConsoleReporter;

    let mut workflow = CommitWorkflow::new(&git_repo, config, &reporter)
        .with_remote(options.remote)
        .with_branch(options.branch);

    let outcome = match options.message {
        Some(message) => workflow.run(&mut FixedMessage::new(message))?,
        None => {
            let mut source = ConsolePrompt::new(Prompter::stdio(), grammar)
                .guided(options.interactive)
                .confirm_before_commit(!options.yes);
            workflow.run(&mut source)?
        }
    };

    match outcome {
        WorkflowOutcome::NothingToCommit => print_info("Nothing to commit, working tree clean"),
        WorkflowOutcome::Cancelled => print_info("Commit cancelled"),
        WorkflowOutcome::Committed { .. } => print_info("Push skipped"),
        WorkflowOutcome::Pushed { .. } => println!(),
    }
    Ok(())
}

/// Prints workflow progress to the terminal
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn status(&self, status: &RepositoryStatus) {
        let branch = status.current_branch.as_deref().unwrap_or("(detached HEAD)");
        println!(
            "\n{} {}  {}",
            "On branch".white(),
            branch.green().bold(),
            format!(
                "{} staged, {} unstaged",
                status.staged_files.len(),
                status.unstaged_files.len()
            )
            .bright_black()
        );
    }

    fn step(&self, message: &str) {
        print_step(message);
    }

    fn done(&self, message: &str) {
        print_success(message);
    }

    fn warn(&self, message: &str) {
        print_warning(message);
    }
}

/// Asks the user for a message, freeform or guided field by field
pub struct ConsolePrompt<R, W> {
    prompter: Prompter<R, W>,
    grammar: MessageGrammar,
    guided: bool,
    confirm: bool,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(prompter: Prompter<R, W>, grammar: MessageGrammar) -> Self {
        ConsolePrompt {
            prompter,
            grammar,
            guided: false,
            confirm: true,
        }
    }

    pub fn guided(mut self, guided: bool) -> Self {
        self.guided = guided;
        self
    }

    pub fn confirm_before_commit(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    fn freeform(&mut self, status: &RepositoryStatus) -> Result<MessageReply> {
        let suggestions = suggest_messages(status, &self.grammar);
        if !suggestions.is_empty() {
            self.prompter.say("\nSuggestions:")?;
            for (i, suggestion) in suggestions.iter().enumerate() {
                self.prompter.say(&format!("  {}. {}", i + 1, suggestion))?;
            }
        }

        let question = if suggestions.is_empty() {
            "\nCommit message:"
        } else {
            "\nCommit message (or a suggestion number):"
        };

        let Some(answer) = self.prompter.ask(question)? else {
            return Ok(MessageReply::Cancelled);
        };
        if answer.is_empty() {
            return Ok(MessageReply::Cancelled);
        }

        let picked = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| suggestions.get(i));
        Ok(MessageReply::Provided(picked.cloned().unwrap_or(answer)))
    }

    fn guided_message(&mut self) -> Result<MessageReply> {
        let types = self.grammar.allowed_types().to_vec();
        let labels: Vec<String> = types
            .iter()
            .map(|tag| match find_commit_type(tag) {
                Some(known) => format!("{:<10} {}", tag, known.description),
                None => tag.clone(),
            })
            .collect();

        self.prompter.say("\nSelect the type of change:")?;
        let Some(index) = self.prompter.choose("Type", &labels)? else {
            return Ok(MessageReply::Cancelled);
        };

        let Some(scope) = self.prompter.ask("Scope (optional, e.g. auth):")? else {
            return Ok(MessageReply::Cancelled);
        };

        let Some(description) = self.prompter.ask(&format!(
            "Description (lowercase, max {} chars):",
            self.grammar.max_description_length()
        ))?
        else {
            return Ok(MessageReply::Cancelled);
        };
        if description.is_empty() {
            return Ok(MessageReply::Cancelled);
        }

        let Some(breaking) = self.prompter.confirm("Breaking change?", false)? else {
            return Ok(MessageReply::Cancelled);
        };

        let scope = (!scope.is_empty()).then_some(scope.as_str());
        Ok(MessageReply::Provided(compose_header(
            &types[index],
            scope,
            breaking,
            &description,
        )))
    }
}

impl<R: BufRead, W: Write> MessageSource for ConsolePrompt<R, W> {
    fn next_message(&mut self, request: &MessageRequest<'_>) -> Result<MessageReply> {
        if let Some(rejected) = request.rejected {
            self.prompter.say("\nInvalid commit message:")?;
            for (i, error) in rejected.error_messages().iter().enumerate() {
                self.prompter.say(&format!("  {}. {}", i + 1, error))?;
            }
            self.prompter.say(&format!("\n{}", self.grammar.format_help()))?;

            match self.prompter.confirm("\nTry again?", true)? {
                Some(true) => {}
                Some(false) => return Ok(MessageReply::Abandoned),
                None => return Ok(MessageReply::Cancelled),
            }
        }

        if self.guided {
            self.guided_message()
        } else {
            self.freeform(request.status)
        }
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        if !self.confirm {
            return Ok(true);
        }
        Ok(self
            .prompter
            .confirm(&format!("\nCommit with message \"{message}\"?"), true)?
            .unwrap_or(false))
    }
}
