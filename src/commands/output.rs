//! @acp:module "Command Output"
//! @acp:summary "Shared rendering helpers and input loading for commands"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Read;
use std::path::Path;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::guidelines::{Channel, ConstraintSet, FieldKind, ValidationVerdict};

/// Read a file, or stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Instruction text from an explicit file, else from the configured prompt store
pub fn load_instructions(
    config: &Config,
    channel: Channel,
    explicit: Option<&Path>,
) -> Result<Option<String>> {
    if let Some(path) = explicit {
        return Ok(Some(read_input(path)?));
    }

    let Some(store) = config.prompt_store()? else {
        return Ok(None);
    };
    match store.get(channel) {
        Some(data) => {
            tracing::debug!("Using stored prompt '{}' for {}", data.name, channel);
            Ok(Some(data.prompt.clone()))
        }
        None => {
            tracing::warn!("Prompt store has no entry for {}", channel);
            Ok(None)
        }
    }
}

/// Print a constraint set in human-readable form
pub fn print_constraint_set(set: &ConstraintSet) {
    if set.is_empty() {
        println!("{} No constraints", style("•").dim());
        return;
    }

    let mut bounded = set.bounded_fields().peekable();
    if bounded.peek().is_some() {
        println!("{}", style("Length:").bold());
        for (field, bound) in bounded {
            let note = if bound.is_inverted() {
                format!(" {}", style("(min > max)").yellow())
            } else {
                String::new()
            };
            println!("  {:<12} {}{}", field_heading(field), bound, note);
        }
    }

    print_list("Prohibited:", set.prohibited_terms());
    print_list("Required:", set.required_elements());
    print_list("Rules:", set.special_rules());
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{}", style(heading).bold());
    for item in items {
        println!("  - {}", item);
    }
}

fn field_heading(field: FieldKind) -> String {
    format!("{}:", field.as_str())
}

/// Print a verdict with ✓/✗ and its messages, indented by `indent`
pub fn print_verdict(label: &str, verdict: &ValidationVerdict, indent: usize) {
    let pad = " ".repeat(indent);
    if verdict.is_valid {
        println!("{}{} {}", pad, style("✓").green(), label);
    } else {
        println!("{}{} {}", pad, style("✗").red(), label);
        for error in &verdict.errors {
            println!("{}    {}", pad, style(error).red());
        }
    }
}
