//! @acp:module "Extract Command"
//! @acp:summary "Show the constraints derived from an instruction document"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use super::output::{print_constraint_set, read_input};
use crate::guidelines::{conditions_section, extract_constraints};

/// Options for the extract command
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Instruction document (`-` for stdin)
    pub input: PathBuf,
    /// Output as JSON
    pub json: bool,
}

/// Execute the extract command
pub fn execute_extract(options: ExtractOptions) -> Result<()> {
    let text = read_input(&options.input)?;
    let set = extract_constraints(&text);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&set)?);
        return Ok(());
    }

    if conditions_section(&text).is_none() {
        eprintln!(
            "{} No conditions section found (expected a '###조건' or '### Conditions' header)",
            style("!").yellow()
        );
    }
    print_constraint_set(&set);
    Ok(())
}
