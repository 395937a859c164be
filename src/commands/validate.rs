use crate::core::{
    config::WorkflowConfiguration,
    error::{EasyCommitError, Result},
    grammar::MessageGrammar,
    output::print_success,
};
use colored::*;

pub fn execute_validate(message: &str) -> Result<()> {
    let config = WorkflowConfiguration::load();
    let grammar = MessageGrammar::new(&config);
    let result = grammar.validate(message);

    if !result.is_valid() {
        eprintln!("\n{}", grammar.format_help().bright_black());
        return Err(EasyCommitError::invalid_message(result.error_messages()));
    }

    print_success("Valid commit message");
    if let Some(parsed) = &result.parsed {
        println!("  {} {}", "type:".bright_black(), parsed.commit_type);
        if let Some(scope) = &parsed.scope {
            println!("  {} {}", "scope:".bright_black(), scope);
        }
        if parsed.is_breaking {
            println!("  {} {}", "breaking:".bright_black(), "yes".red().bold());
        }
    }
    println!();
    Ok(())
}
