//! @acp:module "Copy Validator"
//! @acp:summary "Check one candidate text against a ConstraintSet"
//! @acp:domain copy
//! @acp:layer logic

use serde::{Deserialize, Serialize};

use super::types::{ConstraintSet, FieldKind};
use crate::error::Result;

/// @acp:summary "Outcome of validating one field of one candidate"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationVerdict {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// @acp:summary "Validate text for a field kind"
///
/// Every check runs and every failure is reported:
/// 1. length above the maximum
/// 2. length below the minimum
/// 3. one message per prohibited term contained in the text
///
/// Length is the number of characters, whitespace included. Terms match as
/// case-sensitive substrings, so punctuation terms work without word
/// boundaries. An inverted bound (min > max) is applied as written.
pub fn validate(text: &str, field: FieldKind, constraints: &ConstraintSet) -> ValidationVerdict {
    let length = text.chars().count();
    let bound = constraints.bound(field);
    let mut errors = Vec::new();

    if let Some(max) = bound.max {
        if length > max {
            errors.push(format!(
                "{} exceeds the maximum of {} (current: {})",
                field.label(),
                characters(max),
                length
            ));
        }
    }

    if let Some(min) = bound.min {
        if length < min {
            errors.push(format!(
                "{} is under the minimum of {} (current: {})",
                field.label(),
                characters(min),
                length
            ));
        }
    }

    for term in constraints.prohibited_terms() {
        if !term.is_empty() && text.contains(term.as_str()) {
            errors.push(format!("Contains prohibited term: \"{}\"", term));
        }
    }

    ValidationVerdict::from_errors(errors)
}

/// @acp:summary "Validate with a field kind given by name"
///
/// An unknown field name is a caller bug and is returned as
/// [`crate::AdCopyError::UnknownFieldKind`].
pub fn validate_field(
    text: &str,
    field_name: &str,
    constraints: &ConstraintSet,
) -> Result<ValidationVerdict> {
    let field = field_name.parse::<FieldKind>()?;
    Ok(validate(text, field, constraints))
}

fn characters(count: usize) -> String {
    if count == 1 {
        "1 character".to_string()
    } else {
        format!("{} characters", count)
    }
}
