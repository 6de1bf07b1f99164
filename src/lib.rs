#![forbid(unsafe_code)]

//! @acp:module "AdCopy Library"
//! @acp:summary "Channel guideline extraction and ad copy validation"
//! @acp:domain copy
//! @acp:layer api
//! @acp:stability stable
//!
//! # AdCopy Guard
//!
//! Checks generated ad copy against per-channel rules.
//!
//! ## Features
//!
//! - **Prose as configuration**: length bounds, prohibited terms and advisory
//!   rules are read from the conditions section of an instruction document
//! - **Validation**: character-count bounds and substring term checks with
//!   messages that cite the limit and the measured value
//! - **Built-in tables**: per-channel fallback rules when no instructions exist
//! - **Response parsing**: fenced JSON or numbered lists from the generator
//!
//! ## Example
//!
//! ```rust
//! use adcopy::{extract_constraints, validate, FieldKind};
//!
//! let instructions = "### Conditions\n- Title: 1-15 characters\n- Prohibited: 'free', 'best'";
//! let constraints = extract_constraints(instructions);
//!
//! let verdict = validate("best deal today", FieldKind::Title, &constraints);
//! assert!(!verdict.is_valid);
//! assert_eq!(verdict.errors, vec!["Contains prohibited term: \"best\""]);
//! ```

pub mod commands;
pub mod config;
pub mod copy;
pub mod error;
pub mod guidelines;

// Re-exports
pub use config::{Config, PromptData, PromptStore};
pub use copy::{parse_response, validate_copies, CopyResult, GeneratedCopy, ValidatedCopy};
pub use error::{AdCopyError, Result};
pub use guidelines::{
    extract_constraints, fallback_constraints, resolve_constraints, validate, validate_field,
    Channel, ConstraintSet, ConstraintSetBuilder, FieldKind, LengthBound, ValidationVerdict,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
