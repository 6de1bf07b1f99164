//! @acp:module "Copy"
//! @acp:summary "Generated copy items and per-request validation results"
//! @acp:domain copy
//! @acp:layer service
//!
//! A generation request yields several copy items. Each present field of an
//! item is validated against the request's constraints; the verdicts are
//! folded into a per-item flag and a flat list of messages for the whole
//! result.

mod parse;

pub use parse::parse_response;

use serde::{Deserialize, Serialize};

use crate::guidelines::{validate, Channel, ConstraintSet, FieldKind};

/// @acp:summary "One candidate returned by the generation service"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCopy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
    /// Hook style label (question, pain, stats, emotion) on landing copy
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl GeneratedCopy {
    pub fn full_text(text: impl Into<String>) -> Self {
        Self {
            full_text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn headline(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn banner(main: impl Into<String>, sub: impl Into<String>) -> Self {
        Self {
            main_text: Some(main.into()),
            sub_text: Some(sub.into()),
            ..Default::default()
        }
    }

    /// Text of a field, if present
    pub fn field(&self, field: FieldKind) -> Option<&str> {
        match field {
            FieldKind::Title => self.title.as_deref(),
            FieldKind::Description => self.description.as_deref(),
            FieldKind::Main => self.main_text.as_deref(),
            FieldKind::Sub => self.sub_text.as_deref(),
            FieldKind::Full => self.full_text.as_deref(),
        }
    }
}

/// @acp:summary "A copy item with its validation outcome"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedCopy {
    #[serde(flatten)]
    pub copy: GeneratedCopy,
    pub is_valid: bool,
    pub validation_errors: Vec<String>,
}

/// @acp:summary "Validated copies for one request"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyResult {
    pub channel: Channel,
    pub copies: Vec<ValidatedCopy>,
    pub is_valid: bool,
    /// Every item's messages, in item order
    pub validation_errors: Vec<String>,
}

impl CopyResult {
    pub fn valid_count(&self) -> usize {
        self.copies.iter().filter(|c| c.is_valid).count()
    }
}

/// @acp:summary "Validate every item against the channel's field layout"
///
/// Fields that are missing or empty are skipped. Items are kept whether or
/// not they pass.
pub fn validate_copies(
    copies: Vec<GeneratedCopy>,
    channel: Channel,
    constraints: &ConstraintSet,
) -> CopyResult {
    let mut validation_errors = Vec::new();

    let copies: Vec<ValidatedCopy> = copies
        .into_iter()
        .map(|copy| {
            let errors: Vec<String> = channel
                .fields()
                .iter()
                .filter_map(|field| {
                    copy.field(*field)
                        .filter(|text| !text.is_empty())
                        .map(|text| validate(text, *field, constraints))
                })
                .flat_map(|verdict| verdict.errors)
                .collect();

            validation_errors.extend(errors.iter().cloned());
            ValidatedCopy {
                copy,
                is_valid: errors.is_empty(),
                validation_errors: errors,
            }
        })
        .collect();

    tracing::debug!(
        "Validated {} {} copies, {} violations",
        copies.len(),
        channel,
        validation_errors.len()
    );

    CopyResult {
        channel,
        is_valid: validation_errors.is_empty(),
        copies,
        validation_errors,
    }
}
