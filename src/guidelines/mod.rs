//! @acp:module "Guidelines"
//! @acp:summary "Channel guideline extraction and copy validation"
//! @acp:domain copy
//! @acp:layer model
//!
//! This module provides the guideline engine:
//! - Constraint extraction from editable instruction prose
//! - Per-field validation of candidate copy
//! - Built-in channel tables used when no instructions are available

mod channel;
mod extract;
mod fallback;
mod types;
mod validate;

pub use channel::Channel;
pub use extract::{classify_line, conditions_section, extract_constraints, LineRule};
pub use fallback::{fallback_constraints, resolve_constraints};
pub use types::{ConstraintSet, ConstraintSetBuilder, FieldKind, LengthBound};
pub use validate::{validate, validate_field, ValidationVerdict};
