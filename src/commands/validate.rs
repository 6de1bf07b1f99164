//! @acp:module "Validate Command"
//! @acp:summary "Validate one piece of copy for a channel field"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{bail, Result};

use super::output::{load_instructions, print_verdict};
use crate::config::Config;
use crate::guidelines::{validate, Channel, FieldKind};

/// Options for the validate command
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    pub channel: Channel,
    pub field: FieldKind,
    /// Copy text to check
    pub text: String,
    /// Instruction document overriding the prompt store
    pub instructions: Option<PathBuf>,
    /// Output as JSON
    pub json: bool,
}

/// Execute the validate command. Returns whether the text passed.
pub fn execute_validate(options: ValidateOptions, config: &Config) -> Result<bool> {
    if !options.channel.fields().contains(&options.field) {
        bail!(
            "Field '{}' is not part of {} copy (expected one of: {})",
            options.field,
            options.channel,
            options
                .channel
                .fields()
                .iter()
                .map(|f| f.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let instructions =
        load_instructions(config, options.channel, options.instructions.as_deref())?;
    let constraints = config.constraints_for(options.channel, instructions.as_deref());
    let verdict = validate(&options.text, options.field, &constraints);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        let label = format!(
            "{} {} ({} characters)",
            options.channel,
            options.field,
            options.text.chars().count()
        );
        print_verdict(&label, &verdict, 0);
    }

    Ok(verdict.is_valid)
}
