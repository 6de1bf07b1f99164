//! @acp:module "Constraint Extractor"
//! @acp:summary "Derive a ConstraintSet from the conditions section of an instruction document"
//! @acp:domain copy
//! @acp:layer service
//!
//! Editors write channel rules as plain prose under a `###조건` (or
//! `### Conditions`) header. Extraction is line oriented and runs in two
//! stages: every line is classified into zero or more [`LineRule`]s, then
//! the rules are folded into a [`ConstraintSetBuilder`].
//!
//! Length lines replace the previous bound for their field (last match
//! wins), prohibition lines append to the term list. Lines that match
//! nothing are dropped. Extraction never fails: absent or malformed
//! sections degrade to an empty or partial set.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{ConstraintSet, ConstraintSetBuilder, FieldKind, LengthBound};

/// Conditions section: header token up to the next `###` header or end of text.
/// Groups: 1=section body
static SECTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)###[ \t]*(?:조건|conditions?\b)(.*?)(?:###|\z)").unwrap()
});

/// Field tokens. English tokens need word boundaries, Korean ones are
/// matched by containment.
static FIELD_PATTERNS: LazyLock<[(FieldKind, Regex); 5]> = LazyLock::new(|| {
    [
        (FieldKind::Title, Regex::new(r"(?i)\btitles?\b|제목").unwrap()),
        (FieldKind::Description, Regex::new(r"(?i)\bdescriptions?\b|설명").unwrap()),
        (FieldKind::Main, Regex::new(r"(?i)\bmain(?:[ \t-]?text)?\b|메인").unwrap()),
        (FieldKind::Sub, Regex::new(r"(?i)\bsub(?:[ \t-]?text)?\b|서브").unwrap()),
        (FieldKind::Full, Regex::new(r"(?i)\bfull[ \t_-]?text\b").unwrap()),
    ]
});

/// Length unit marker
static UNIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bchar(?:acter)?s?\b|자").unwrap()
});

/// `<int><dash><int><unit>`, dash is hyphen, en-dash or tilde.
/// Groups: 1=min, 2=max
static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*[-–~]\s*(\d+)\s*(?:(?i:char(?:acter)?s?)\b|자)").unwrap()
});

/// `<int><unit>`
/// Groups: 1=max
static SINGLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:(?i:char(?:acter)?s?)\b|자)").unwrap()
});

/// Prohibited-term marker
static PROHIBITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:prohibit(?:ed)?|forbidden|banned)\b|금지어").unwrap()
});

/// Quoted phrase or bare whitespace/comma delimited token.
/// Groups: 1=quoted body, 2=bare token
static TERM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"‘’“”]([^'"‘’“”]+)['"‘’“”]|([^,\s]+)"#).unwrap()
});

static BULLET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-•]\s*").unwrap()
});

const QUOTES: &[char] = &['\'', '"', '‘', '’', '“', '”'];

/// Filler words that show up on prohibition lines but are never terms
const GENERIC_WORDS: &[&str] = &[
    "etc", "etc.", "word", "words", "term", "terms", "등", "및",
];

/// Filler matched by containment ("expressions", "표현과")
const GENERIC_STEMS: &[&str] = &["expression", "표현"];

/// @acp:summary "What a single condition line contributes"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRule {
    /// Replace the bound of one field
    Length { field: FieldKind, bound: LengthBound },
    /// Append terms to the prohibited list
    Prohibited(Vec<String>),
    /// Append an advisory rule
    Special(String),
}

/// @acp:summary "Extract a ConstraintSet from free-form instruction text"
pub fn extract_constraints(instruction_text: &str) -> ConstraintSet {
    let Some(section) = conditions_section(instruction_text) else {
        tracing::debug!("No conditions section in instruction text");
        return ConstraintSet::default();
    };

    let set = section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(classify_line)
        .fold(ConstraintSetBuilder::new(), apply_rule)
        .build();

    tracing::debug!(
        "Extracted {} bounded fields, {} prohibited terms, {} special rules",
        set.bounded_fields().count(),
        set.prohibited_terms().len(),
        set.special_rules().len()
    );
    set
}

/// Body of the first conditions section, if any
pub fn conditions_section(instruction_text: &str) -> Option<&str> {
    SECTION_PATTERN
        .captures(instruction_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// @acp:summary "Classify one trimmed, non-blank line"
///
/// A line can yield several rules: one length rule per field it mentions,
/// plus a prohibition rule.
pub fn classify_line(line: &str) -> Vec<LineRule> {
    let mut rules = Vec::new();
    let has_unit = UNIT_PATTERN.is_match(line);
    let has_prohibition = PROHIBITION_PATTERN.is_match(line);

    if has_unit {
        for (field, pattern) in FIELD_PATTERNS.iter() {
            if !pattern.is_match(line) {
                continue;
            }
            if let Some(bound) = parse_length(line, *field) {
                rules.push(LineRule::Length { field: *field, bound });
            }
        }
    }

    if has_prohibition {
        let terms = parse_prohibited_terms(line);
        if !terms.is_empty() {
            rules.push(LineRule::Prohibited(terms));
        }
    }

    if !has_unit && !has_prohibition && BULLET_PATTERN.is_match(line) {
        let rule = BULLET_PATTERN.replace(line, "");
        if !rule.is_empty() {
            rules.push(LineRule::Special(rule.into_owned()));
        }
    }

    rules
}

fn apply_rule(builder: ConstraintSetBuilder, rule: LineRule) -> ConstraintSetBuilder {
    match rule {
        LineRule::Length { field, bound } => {
            if builder.has_bound(field) {
                tracing::debug!("Overriding earlier {} bound with {}", field, bound);
            }
            builder.bound(field, bound)
        }
        LineRule::Prohibited(terms) => builder.prohibited(terms),
        LineRule::Special(rule) => builder.rules([rule]),
    }
}

/// Range first, then a single count. Numbers that overflow are skipped.
fn parse_length(line: &str, field: FieldKind) -> Option<LengthBound> {
    if let Some(caps) = RANGE_PATTERN.captures(line) {
        let min = caps[1].parse::<usize>().ok();
        let max = caps[2].parse::<usize>().ok()?;
        return Some(match min {
            Some(min) if field.keeps_range_min() => LengthBound::range(min, max),
            _ => LengthBound::max(max),
        });
    }

    SINGLE_PATTERN
        .captures(line)
        .and_then(|caps| caps[1].parse::<usize>().ok())
        .map(LengthBound::max)
}

fn parse_prohibited_terms(line: &str) -> Vec<String> {
    let body = BULLET_PATTERN.replace(line, "");

    TERM_PATTERN
        .captures_iter(&body)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().replace(QUOTES, "").trim().to_string())
        .filter(|term| !term.is_empty() && !is_filler(term))
        .collect()
}

fn is_filler(term: &str) -> bool {
    if PROHIBITION_PATTERN.is_match(term) {
        return true;
    }
    let word = term.trim_end_matches(':').to_lowercase();
    GENERIC_WORDS.contains(&word.as_str())
        || GENERIC_STEMS.iter().any(|stem| word.contains(stem))
}
