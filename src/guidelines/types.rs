//! @acp:module "Guideline Types"
//! @acp:summary "Field kinds, length bounds and the immutable constraint set"
//! @acp:domain copy
//! @acp:layer model

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdCopyError;

/// @acp:summary "Text slot of a generated copy item"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Search banner headline
    Title,
    /// Search banner body line
    Description,
    /// Chat-app board main text
    Main,
    /// Chat-app board sub text
    Sub,
    /// Single full-text slot (social feed, landing hook)
    Full,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Title,
        FieldKind::Description,
        FieldKind::Main,
        FieldKind::Sub,
        FieldKind::Full,
    ];

    /// Get string representation for serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Title => "title",
            FieldKind::Description => "description",
            FieldKind::Main => "main",
            FieldKind::Sub => "sub",
            FieldKind::Full => "full",
        }
    }

    /// Name used at the start of violation messages
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Title => "Title",
            FieldKind::Description => "Description",
            FieldKind::Main => "Main text",
            FieldKind::Sub => "Sub text",
            FieldKind::Full => "Text",
        }
    }

    /// Whether a range line keeps its lower end for this field.
    /// Main, sub and full-text lines only contribute their upper end.
    pub fn keeps_range_min(&self) -> bool {
        matches!(self, FieldKind::Title | FieldKind::Description)
    }
}

impl FromStr for FieldKind {
    type Err = AdCopyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(FieldKind::Title),
            "description" => Ok(FieldKind::Description),
            "main" | "maintext" => Ok(FieldKind::Main),
            "sub" | "subtext" => Ok(FieldKind::Sub),
            "full" | "fulltext" => Ok(FieldKind::Full),
            _ => Err(AdCopyError::UnknownFieldKind(s.to_string())),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @acp:summary "Inclusive character-count bounds for one field"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBound {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
}

impl LengthBound {
    pub fn max(max: usize) -> Self {
        Self { min: None, max: Some(max) }
    }

    pub fn range(min: usize, max: usize) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// True when malformed instructions produced `min > max`
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    /// Take each missing end from `other`, unless it would put min above max
    pub fn filled_from(self, other: LengthBound) -> Self {
        let min = self
            .min
            .or(other.min.filter(|min| self.max.map_or(true, |max| *min <= max)));
        let max = self
            .max
            .or(other.max.filter(|max| min.map_or(true, |min| min <= *max)));
        Self { min, max }
    }
}

impl fmt::Display for LengthBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "{}-{} characters", min, max),
            (None, Some(max)) => write!(f, "at most {} characters", max),
            (Some(min), None) => write!(f, "at least {} characters", min),
            (None, None) => write!(f, "unbounded"),
        }
    }
}

/// @acp:summary "Structured guideline bundle for one channel or request"
///
/// Built once per request through [`ConstraintSetBuilder`] and never mutated.
/// Fields without an entry in `bounds` are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintSet {
    #[serde(default)]
    bounds: BTreeMap<FieldKind, LengthBound>,
    #[serde(default)]
    prohibited_terms: Vec<String>,
    #[serde(default)]
    required_elements: Vec<String>,
    #[serde(default)]
    special_rules: Vec<String>,
}

impl ConstraintSet {
    pub fn builder() -> ConstraintSetBuilder {
        ConstraintSetBuilder::new()
    }

    /// Bound for a field (empty bound when the field is unconstrained)
    pub fn bound(&self, field: FieldKind) -> LengthBound {
        self.bounds.get(&field).copied().unwrap_or_default()
    }

    pub fn min_length(&self, field: FieldKind) -> Option<usize> {
        self.bound(field).min
    }

    pub fn max_length(&self, field: FieldKind) -> Option<usize> {
        self.bound(field).max
    }

    /// Fields that carry at least one bound, in [`FieldKind`] order
    pub fn bounded_fields(&self) -> impl Iterator<Item = (FieldKind, LengthBound)> + '_ {
        self.bounds
            .iter()
            .filter(|(_, bound)| !bound.is_empty())
            .map(|(field, bound)| (*field, *bound))
    }

    pub fn prohibited_terms(&self) -> &[String] {
        &self.prohibited_terms
    }

    /// Advisory only, never checked by the validator
    pub fn required_elements(&self) -> &[String] {
        &self.required_elements
    }

    /// Advisory only, never checked by the validator
    pub fn special_rules(&self) -> &[String] {
        &self.special_rules
    }

    /// True when no bound, term, element or rule is present
    pub fn is_empty(&self) -> bool {
        self.bounded_fields().next().is_none()
            && self.prohibited_terms.is_empty()
            && self.required_elements.is_empty()
            && self.special_rules.is_empty()
    }
}

/// @acp:summary "Accumulator used to assemble a ConstraintSet"
///
/// Bounds are replaced wholesale on every call (last write wins). Term,
/// element and rule lists are appended to.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSetBuilder {
    bounds: BTreeMap<FieldKind, LengthBound>,
    prohibited_terms: Vec<String>,
    required_elements: Vec<String>,
    special_rules: Vec<String>,
}

impl ConstraintSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the bound for a field
    pub fn bound(mut self, field: FieldKind, bound: LengthBound) -> Self {
        if bound.is_empty() {
            self.bounds.remove(&field);
        } else {
            self.bounds.insert(field, bound);
        }
        self
    }

    pub fn max(self, field: FieldKind, max: usize) -> Self {
        self.bound(field, LengthBound::max(max))
    }

    pub fn range(self, field: FieldKind, min: usize, max: usize) -> Self {
        self.bound(field, LengthBound::range(min, max))
    }

    pub fn prohibited<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prohibited_terms.extend(terms.into_iter().map(Into::into));
        self
    }

    pub fn required<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_elements.extend(elements.into_iter().map(Into::into));
        self
    }

    pub fn rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_rules.extend(rules.into_iter().map(Into::into));
        self
    }

    pub fn has_bound(&self, field: FieldKind) -> bool {
        self.bounds.contains_key(&field)
    }

    pub fn has_prohibited_terms(&self) -> bool {
        !self.prohibited_terms.is_empty()
    }

    pub fn has_required_elements(&self) -> bool {
        !self.required_elements.is_empty()
    }

    pub fn has_special_rules(&self) -> bool {
        !self.special_rules.is_empty()
    }

    pub fn build(self) -> ConstraintSet {
        ConstraintSet {
            bounds: self.bounds,
            prohibited_terms: self.prohibited_terms,
            required_elements: self.required_elements,
            special_rules: self.special_rules,
        }
    }
}

impl From<ConstraintSet> for ConstraintSetBuilder {
    fn from(set: ConstraintSet) -> Self {
        Self {
            bounds: set.bounds,
            prohibited_terms: set.prohibited_terms,
            required_elements: set.required_elements,
            special_rules: set.special_rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_from_str() {
        assert_eq!("title".parse::<FieldKind>().unwrap(), FieldKind::Title);
        assert_eq!("mainText".parse::<FieldKind>().unwrap(), FieldKind::Main);
        assert_eq!(" FULL ".parse::<FieldKind>().unwrap(), FieldKind::Full);
        assert!(matches!(
            "headline".parse::<FieldKind>(),
            Err(AdCopyError::UnknownFieldKind(name)) if name == "headline"
        ));
    }

    #[test]
    fn test_builder_bound_last_write_wins() {
        let set = ConstraintSet::builder()
            .range(FieldKind::Title, 1, 15)
            .max(FieldKind::Title, 20)
            .build();

        assert_eq!(set.bound(FieldKind::Title), LengthBound::max(20));
        assert_eq!(set.min_length(FieldKind::Title), None);
    }

    #[test]
    fn test_builder_lists_accumulate() {
        let set = ConstraintSet::builder()
            .prohibited(["free"])
            .prohibited(["best"])
            .build();

        assert_eq!(set.prohibited_terms(), ["free", "best"]);
    }

    #[test]
    fn test_empty_set() {
        let set = ConstraintSet::default();
        assert!(set.is_empty());
        for field in FieldKind::ALL {
            assert!(set.bound(field).is_empty());
        }
    }

    #[test]
    fn test_inverted_bound_is_kept() {
        let set = ConstraintSet::builder().range(FieldKind::Description, 45, 20).build();
        assert!(set.bound(FieldKind::Description).is_inverted());
    }

    #[test]
    fn test_bound_filled_per_end() {
        let table = LengthBound::range(70, 90);
        assert_eq!(LengthBound::max(90).filled_from(table), LengthBound::range(70, 90));
        assert_eq!(LengthBound::default().filled_from(table), table);
        assert_eq!(
            LengthBound::range(5, 20).filled_from(table),
            LengthBound::range(5, 20)
        );
        assert_eq!(
            LengthBound { min: Some(75), max: None }.filled_from(table),
            LengthBound::range(75, 90)
        );
        // A table minimum above the written maximum is left out
        assert_eq!(LengthBound::max(50).filled_from(table), LengthBound::max(50));
    }

    #[test]
    fn test_serializes_camel_case() {
        let set = ConstraintSet::builder()
            .range(FieldKind::Title, 1, 15)
            .prohibited(["무료"])
            .build();
        let json = serde_json::to_value(&set).unwrap();

        assert_eq!(json["bounds"]["title"]["min"], 1);
        assert_eq!(json["bounds"]["title"]["max"], 15);
        assert_eq!(json["prohibitedTerms"][0], "무료");
        assert!(json["specialRules"].as_array().unwrap().is_empty());
    }
}
