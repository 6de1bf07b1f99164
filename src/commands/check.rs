//! @acp:module "Check Command"
//! @acp:summary "Parse a raw generation response and check every copy"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use super::output::{load_instructions, print_verdict, read_input};
use crate::config::Config;
use crate::copy::{parse_response, validate_copies, CopyResult};
use crate::guidelines::{validate, Channel, ConstraintSet};

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub channel: Channel,
    /// Raw response file (`-` for stdin)
    pub response: PathBuf,
    /// Instruction document overriding the prompt store
    pub instructions: Option<PathBuf>,
    /// Output as JSON
    pub json: bool,
}

/// Execute the check command. Returns whether every copy passed.
pub fn execute_check(options: CheckOptions, config: &Config) -> Result<bool> {
    let raw = read_input(&options.response)?;
    let instructions =
        load_instructions(config, options.channel, options.instructions.as_deref())?;
    let constraints = config.constraints_for(options.channel, instructions.as_deref());

    let copies = parse_response(&raw, options.channel);
    let result = validate_copies(copies, options.channel, &constraints);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result, &constraints);
    }

    Ok(result.is_valid)
}

fn print_result(result: &CopyResult, constraints: &ConstraintSet) {
    println!(
        "{} {} copies for {}\n",
        style("→").cyan(),
        result.copies.len(),
        style(result.channel).bold()
    );

    for (i, item) in result.copies.iter().enumerate() {
        let header = if item.is_valid {
            style(format!("#{}", i + 1)).green()
        } else {
            style(format!("#{}", i + 1)).red()
        };
        match &item.copy.kind {
            Some(kind) => println!("{} ({})", header, kind),
            None => println!("{}", header),
        }

        for field in result.channel.fields() {
            let Some(text) = item.copy.field(*field).filter(|t| !t.is_empty()) else {
                println!("    {} {}: {}", style("•").dim(), field, style("(missing)").dim());
                continue;
            };
            let verdict = validate(text, *field, constraints);
            print_verdict(&format!("{}: {}", field, text), &verdict, 2);
        }
    }

    println!();
    if result.is_valid {
        println!("{} All copies pass", style("✓").green());
    } else {
        println!(
            "{} {}/{} copies pass, {} violations",
            style("✗").red(),
            result.valid_count(),
            result.copies.len(),
            result.validation_errors.len()
        );
    }
}
