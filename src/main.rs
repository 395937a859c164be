use clap::{Parser, Subcommand};
use easy_commit::commands::*;
use easy_commit::core::{
    error::Result, git::DEFAULT_REMOTE, print_error_with_hint, print_info,
    prompt::waiting_for_input,
};
use log::LevelFilter;
use std::process::{self, ExitCode};

/// Exit status after Ctrl-C outside of a prompt, as a shell reports SIGINT
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Parser)]
#[command(name = "easy-commit")]
#[command(about = "Write, validate and push conventional commits")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a message, stage, commit and push (c alias)
    #[command(visible_alias = "c")]
    Commit {
        /// Commit message, skips interactive entry
        #[arg(short, long)]
        message: Option<String>,
        /// Build the message step by step: type, scope, description
        #[arg(short, long, conflicts_with = "message")]
        interactive: bool,
        /// Commit without pushing
        #[arg(long)]
        no_push: bool,
        /// Commit the index as is, without staging all changes
        #[arg(long)]
        no_add: bool,
        /// Remote to push to
        #[arg(long, default_value = DEFAULT_REMOTE)]
        remote: String,
        /// Branch to push to instead of the current one
        #[arg(long)]
        branch: Option<String>,
        /// Do not ask for confirmation before committing
        #[arg(short, long)]
        yes: bool,
    },
    /// Show branch, last commit and changed files (s alias)
    #[command(visible_alias = "s")]
    Status,
    /// Check a commit message against the conventional commit format
    Validate {
        /// The message to check
        message: String,
    },
    /// Show or manage the configuration file
    Config {
        /// Overwrite the configuration file with the defaults
        #[arg(long, conflicts_with = "sample")]
        reset: bool,
        /// Write a sample configuration file next to the real one
        #[arg(long)]
        sample: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Ctrl-C at a prompt cancels the run like end of input does. Anywhere else
/// it stops the process, and a running git child gets the signal too.
fn setup_ctrlc_handler() {
    let result = ctrlc::set_handler(|| {
        if waiting_for_input() {
            eprintln!();
            print_info("Commit cancelled");
            process::exit(0);
        }
        log::info!("Received Ctrl+C, stopping");
        process::exit(INTERRUPTED_EXIT_CODE);
    });

    if let Err(e) = result {
        log::warn!("Failed to set Ctrl+C handler: {e}");
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Commit {
            message,
            interactive,
            no_push,
            no_add,
            remote,
            branch,
            yes,
        } => execute_commit(CommitOptions {
            message,
            interactive,
            no_push,
            no_add,
            remote,
            branch,
            yes,
        }),
        Commands::Status => execute_status(),
        Commands::Validate { message } => execute_validate(&message),
        Commands::Config { reset, sample } => execute_config(reset, sample),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    setup_ctrlc_handler();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Exiting after error: {e:?}");
            print_error_with_hint(&e.to_string(), e.hint());
            ExitCode::FAILURE
        }
    }
}
