//! Popularity normalisation.

use careerfit_core::ItemCollection;

/// Normalised popularity scores in collection order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopularityScores {
    scores: Vec<f64>,
}

impl PopularityScores {
    /// Wrap pre-computed scores.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "scores are produced at runtime from item attributes"
    )]
    #[must_use]
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Return the score for the item at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied()
    }

    /// Return the number of scored items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.scores.len()
    }

    /// Report whether any scores are present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Consume the wrapper and return the underlying scores.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.scores
    }
}

/// Min-max scale the configured popularity column of `items`.
///
/// Without a wired popularity column, or when the table lacked that column,
/// every item scores 0.0.
#[must_use]
pub fn compute_popularity(items: &ItemCollection) -> PopularityScores {
    let Some(field) = items
        .schema()
        .popularity_field
        .as_deref()
        .filter(|field| items.has_field(field))
    else {
        return PopularityScores::new(vec![0.0; items.len()]);
    };

    let raw: Vec<Option<f64>> = items
        .items()
        .iter()
        .map(|item| item.attribute(field).and_then(parse_count))
        .collect();
    let unreadable = raw.iter().filter(|value| value.is_none()).count();
    if unreadable > 0 {
        log::warn!(
            "{unreadable} of {} items have no numeric `{field}` value; they score 0.0",
            items.len()
        );
    }
    PopularityScores::new(normalise_scores(&raw))
}

fn parse_count(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Min-max scale `raw` into `0.0..=1.0`.
///
/// Missing values score 0.0 and do not take part in the min and max. When
/// every present value is equal, each of them scores 1.0.
///
/// # Examples
/// ```
/// use careerfit_scorer::normalise_scores;
///
/// assert_eq!(normalise_scores(&[Some(10.0), None, Some(30.0)]), [0.0, 0.0, 1.0]);
/// assert_eq!(normalise_scores(&[Some(7.0), Some(7.0)]), [1.0, 1.0]);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "min-max scaling subtracts and divides by the value range"
)]
pub fn normalise_scores(raw: &[Option<f64>]) -> Vec<f64> {
    let present = raw.iter().flatten().copied();
    let min = present.clone().fold(f64::INFINITY, f64::min);
    let max = present.fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    // Values spanning more than f64::MAX are scaled at half magnitude.
    let scale = if range.is_finite() { 1.0 } else { 0.5 };
    let low = min * scale;
    let span = max * scale - low;
    raw.iter()
        .map(|value| match value {
            None => 0.0,
            Some(_) if span <= 0.0 => 1.0,
            Some(v) => ((v * scale - low) / span).clamp(0.0, 1.0),
        })
        .collect()
}
