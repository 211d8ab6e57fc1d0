//! Per-item evaluation of profile constraints.
//!
//! A constraint is active only when the schema wires its column and the
//! profile supplies a value. Each active constraint scores 1.0 (met), 0.0
//! (unmet) or 0.5 (the item value could not be read), and the aggregate is
//! their mean.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use careerfit_core::{
    CandidateProfile, ConstraintKind, ConstraintOutcome, ConstraintReason, ConstraintReasons,
    DatasetSchema, Item,
};
use regex::Regex;

/// Score given to a constraint whose item value is unreadable.
pub const NEUTRAL_SCORE: f64 = 0.5;

#[expect(
    clippy::expect_used,
    reason = "the number pattern is a literal and always compiles"
)]
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:[.,][0-9]+)?").expect("number pattern compiles"));

#[expect(
    clippy::expect_used,
    reason = "the separator pattern is a literal and always compiles"
)]
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("separator pattern compiles"));

/// Extract the first number in `raw`.
///
/// Only the first ASCII digit run with an optional single decimal group is
/// read, and a decimal comma counts as a dot. Thousands separators are not
/// recognised: `"€45.000"` reads as `45.0`. Non-ASCII digits are skipped.
///
/// # Examples
/// ```
/// use careerfit_scorer::extract_number;
///
/// assert_eq!(extract_number("level 4"), Some(4.0));
/// assert_eq!(extract_number("3,5 years"), Some(3.5));
/// assert_eq!(extract_number("negotiable"), None);
/// ```
#[must_use]
pub fn extract_number(raw: &str) -> Option<f64> {
    let found = NUMBER.find(raw)?;
    found.as_str().replace(',', ".").parse().ok()
}

/// Aggregate constraint score plus one reason per evaluated constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintEvaluation {
    /// Mean of the active constraint scores, or 1.0 when none was active.
    pub score: f64,
    /// Explanation per constraint.
    pub reasons: ConstraintReasons,
}

/// Evaluates profile constraints against items laid out by one schema.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintEvaluator<'a> {
    schema: &'a DatasetSchema,
}

impl<'a> ConstraintEvaluator<'a> {
    /// Create an evaluator for items built with `schema`.
    ///
    /// `schema` must be in canonical form, as returned by
    /// [`ItemCollection::schema`](careerfit_core::ItemCollection::schema).
    #[must_use]
    pub const fn new(schema: &'a DatasetSchema) -> Self {
        Self { schema }
    }

    /// Score `item` against every active constraint in `profile`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "aggregate score is the mean of at most four scores"
    )]
    pub fn evaluate(&self, item: &Item, profile: &CandidateProfile) -> ConstraintEvaluation {
        let mut reasons = ConstraintReasons::new();
        let mut scores = Vec::with_capacity(4);

        let mut record = |kind: ConstraintKind, (score, reason): (f64, ConstraintReason)| {
            scores.push(score);
            reasons.insert(kind, reason);
        };

        if let (Some(field), Some(preferred)) = (
            self.schema.location_field.as_deref(),
            profile.preferred_location.as_deref().filter(|p| !p.is_empty()),
        ) {
            record(
                ConstraintKind::Location,
                location(item.attribute(field).unwrap_or_default(), preferred),
            );
        }
        if let (Some(field), Some(minimum)) =
            (self.schema.salary_min_field.as_deref(), profile.min_salary)
        {
            record(
                ConstraintKind::Salary,
                salary(item.attribute(field).and_then(extract_number), minimum),
            );
        }
        if let (Some(field), Some(maximum)) =
            (self.schema.difficulty_field.as_deref(), profile.max_difficulty)
        {
            record(
                ConstraintKind::Difficulty,
                difficulty(item.attribute(field).and_then(extract_number), maximum),
            );
        }
        if !self.schema.role_tag_fields.is_empty() && !profile.role_include.is_empty() {
            let tags: BTreeSet<String> = self
                .schema
                .role_tag_fields
                .iter()
                .filter_map(|field| item.attribute(field))
                .flat_map(tokens)
                .collect();
            record(ConstraintKind::Role, roles(&tags, &profile.role_include));
        }

        if scores.is_empty() {
            reasons.insert(
                ConstraintKind::Info,
                ConstraintReason::new(ConstraintOutcome::Unconstrained, "No constraints set"),
            );
            return ConstraintEvaluation {
                score: 1.0,
                reasons,
            };
        }
        let score = scores.iter().sum::<f64>() / scores.len() as f64;
        ConstraintEvaluation { score, reasons }
    }
}

fn tokens(value: &str) -> Vec<String> {
    NON_WORD
        .split(&value.to_lowercase())
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

fn location(item_location: &str, preferred: &str) -> (f64, ConstraintReason) {
    let item_lower = item_location.to_lowercase();
    let preferred_lower = preferred.to_lowercase();
    if item_lower.contains(&preferred_lower) {
        (
            1.0,
            ConstraintReason::new(
                ConstraintOutcome::Met,
                format!("Location matches preference '{preferred}'"),
            ),
        )
    } else {
        (
            0.0,
            ConstraintReason::new(
                ConstraintOutcome::Unmet,
                format!("Location mismatch (item: '{item_lower}', preferred: '{preferred_lower}')"),
            ),
        )
    }
}

fn salary(value: Option<f64>, minimum: f64) -> (f64, ConstraintReason) {
    match value {
        None => (
            NEUTRAL_SCORE,
            ConstraintReason::new(ConstraintOutcome::Unknown, "Salary unknown in dataset"),
        ),
        Some(offered) if offered >= minimum => (
            1.0,
            ConstraintReason::new(
                ConstraintOutcome::Met,
                format!("Salary OK (item >= {minimum})"),
            ),
        ),
        Some(offered) => (
            0.0,
            ConstraintReason::new(
                ConstraintOutcome::Unmet,
                format!("Salary below expectation ({offered} < {minimum})"),
            ),
        ),
    }
}

fn difficulty(value: Option<f64>, maximum: f64) -> (f64, ConstraintReason) {
    match value {
        None => (
            NEUTRAL_SCORE,
            ConstraintReason::new(ConstraintOutcome::Unknown, "Difficulty unknown in dataset"),
        ),
        Some(level) if level <= maximum => (
            1.0,
            ConstraintReason::new(
                ConstraintOutcome::Met,
                format!("Difficulty OK (item <= {maximum})"),
            ),
        ),
        Some(level) => (
            0.0,
            ConstraintReason::new(
                ConstraintOutcome::Unmet,
                format!("Difficulty too high ({level} > {maximum})"),
            ),
        ),
    }
}

fn roles(tags: &BTreeSet<String>, role_include: &[String]) -> (f64, ConstraintReason) {
    let wanted: BTreeSet<String> = role_include.iter().map(|role| role.to_lowercase()).collect();
    let overlap: Vec<&str> = tags.intersection(&wanted).map(String::as_str).collect();
    if overlap.is_empty() {
        let listed: Vec<&str> = wanted.iter().map(String::as_str).collect();
        (
            0.0,
            ConstraintReason::new(
                ConstraintOutcome::Unmet,
                format!("No explicit role/domain overlap with [{}]", listed.join(", ")),
            ),
        )
    } else {
        (
            1.0,
            ConstraintReason::new(
                ConstraintOutcome::Met,
                format!("Role/domain matches: {}", overlap.join(", ")),
            ),
        )
    }
}
