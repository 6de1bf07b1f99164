//! @acp:module "Rules Command"
//! @acp:summary "Show the constraints in effect for a channel"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use super::output::{load_instructions, print_constraint_set};
use crate::config::Config;
use crate::guidelines::{fallback_constraints, Channel};

/// Options for the rules command
#[derive(Debug, Clone)]
pub struct RulesOptions {
    pub channel: Channel,
    /// Instruction document overriding the prompt store
    pub instructions: Option<PathBuf>,
    /// Show only the built-in table
    pub builtin: bool,
    /// Output as JSON
    pub json: bool,
}

/// Execute the rules command
pub fn execute_rules(options: RulesOptions, config: &Config) -> Result<()> {
    let set = if options.builtin {
        fallback_constraints(options.channel)
    } else {
        let instructions =
            load_instructions(config, options.channel, options.instructions.as_deref())?;
        config.constraints_for(options.channel, instructions.as_deref())
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&set)?);
        return Ok(());
    }

    println!(
        "{} Guidelines for {}\n",
        style("→").cyan(),
        style(options.channel).bold()
    );
    print_constraint_set(&set);
    Ok(())
}
