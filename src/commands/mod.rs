//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod check;
pub mod extract;
pub mod output;
pub mod rules;
pub mod validate;

pub use check::{execute_check, CheckOptions};
pub use extract::{execute_extract, ExtractOptions};
pub use output::{load_instructions, print_constraint_set, print_verdict, read_input};
pub use rules::{execute_rules, RulesOptions};
pub use validate::{execute_validate, ValidateOptions};
