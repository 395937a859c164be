use crate::core::{
    config::WorkflowConfiguration,
    error::Result,
    output::{print_section_header, print_success},
};
use colored::*;

pub fn execute_config(reset: bool, sample: bool) -> Result<()> {
    if reset {
        let path = WorkflowConfiguration::reset()?;
        print_success(&format!("Configuration reset to defaults: {}", path.display()));
        return Ok(());
    }

    if sample {
        let path = WorkflowConfiguration::create_sample()?;
        print_success(&format!("Sample configuration written to {}", path.display()));
        return Ok(());
    }

    let path = WorkflowConfiguration::config_path()?;
    let config = WorkflowConfiguration::load_from(&path);

    let origin = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    print_section_header("Configuration");
    println!("{}", origin.bright_black());
    println!("{}\n", serde_json::to_string_pretty(&config)?);
    Ok(())
}
