//! Fusion weights, ranked results and the recommender seam.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CandidateProfile, QuizCatalogue};

/// Maximum distance of `alpha + beta + gamma` from `1.0`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Number of results returned when the caller does not ask for a size.
pub const DEFAULT_RESULT_COUNT: usize = 10;

/// Relative contribution of each signal to the final score.
///
/// # Examples
/// ```
/// use careerfit_core::FusionWeights;
///
/// assert!(FusionWeights::default().validate().is_ok());
/// assert!(FusionWeights::new(0.5, 0.5, 0.5).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FusionWeights {
    /// Weight of content similarity.
    pub alpha: f64,
    /// Weight of the constraint score.
    pub beta: f64,
    /// Weight of the popularity score.
    pub gamma: f64,
}

impl FusionWeights {
    /// Build weights from their three components.
    #[must_use]
    pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidWeights`] when any weight is not
    /// finite or the sum is further than [`WEIGHT_SUM_TOLERANCE`] from `1.0`.
    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums the weights and measures the distance from one"
    )]
    pub fn validate(self) -> Result<Self, RecommendError> {
        let sum = self.alpha + self.beta + self.gamma;
        let finite = self.alpha.is_finite() && self.beta.is_finite() && self.gamma.is_finite();
        if finite && (sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE {
            Ok(self)
        } else {
            Err(RecommendError::InvalidWeights { weights: self })
        }
    }

    /// Blend the three signals.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "score fusion is a weighted sum"
    )]
    pub fn fuse(self, content: f64, constraints: f64, popularity: f64) -> f64 {
        self.alpha * content + self.beta * constraints + self.gamma * popularity
    }
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            alpha: 0.80,
            beta: 0.15,
            gamma: 0.05,
        }
    }
}

impl fmt::Display for FusionWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alpha={}, beta={}, gamma={}",
            self.alpha, self.beta, self.gamma
        )
    }
}

/// Constraint a reason refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConstraintKind {
    /// Preferred location.
    Location,
    /// Minimum salary.
    Salary,
    /// Maximum difficulty.
    Difficulty,
    /// Desired role or domain tags.
    Role,
    /// Informational note when no constraint applied.
    Info,
}

impl ConstraintKind {
    /// Return the kind as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Salary => "salary",
            Self::Difficulty => "difficulty",
            Self::Role => "role",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an item fared against one constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConstraintOutcome {
    /// The item satisfies the constraint.
    Met,
    /// The item violates the constraint.
    Unmet,
    /// The item's data could not be interpreted; scored neutrally.
    Unknown,
    /// No constraint was evaluated.
    Unconstrained,
}

/// Structured, human-readable explanation for one constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstraintReason {
    /// Outcome category.
    pub outcome: ConstraintOutcome,
    /// Formatted explanation.
    pub message: String,
}

impl ConstraintReason {
    /// Build a reason from an outcome and message.
    #[must_use]
    pub fn new(outcome: ConstraintOutcome, message: impl Into<String>) -> Self {
        Self {
            outcome,
            message: message.into(),
        }
    }
}

/// Reasons keyed by constraint.
pub type ConstraintReasons = BTreeMap<ConstraintKind, ConstraintReason>;

/// One ranked item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recommendation {
    /// Position of the item in the collection.
    pub index: usize,
    /// Stable item identifier.
    pub item_id: String,
    /// Item title.
    pub title: String,
    /// Weighted blend of the three signals.
    pub final_score: f64,
    /// Cosine similarity between query and item document.
    #[cfg_attr(feature = "serde", serde(rename = "content_sim"))]
    pub content_similarity: f64,
    /// Mean of the active constraint scores.
    pub constraint_score: f64,
    /// Min-max normalised popularity.
    pub popularity_score: f64,
    /// Explanation per evaluated constraint.
    pub constraint_reasons: ConstraintReasons,
}

/// Parameters of a single recommendation request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendRequest {
    /// Who the recommendations are for.
    pub profile: CandidateProfile,
    /// Maximum number of results.
    pub k: usize,
    /// Fusion weights.
    pub weights: FusionWeights,
}

impl RecommendRequest {
    /// Request [`DEFAULT_RESULT_COUNT`] results with default weights.
    #[must_use]
    pub fn new(profile: CandidateProfile) -> Self {
        Self {
            profile,
            k: DEFAULT_RESULT_COUNT,
            weights: FusionWeights::default(),
        }
    }

    /// Set the maximum number of results.
    #[must_use]
    pub const fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the fusion weights.
    #[must_use]
    pub const fn with_weights(mut self, weights: FusionWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Errors returned while serving a recommendation request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// Fusion weights were non-finite or did not sum to one.
    #[error("alpha + beta + gamma must be finite and sum to 1 ({weights})")]
    InvalidWeights {
        /// Weights as supplied.
        weights: FusionWeights,
    },
    /// An item position was outside the collection.
    #[error("item index {index} is out of range for {len} items")]
    UnknownItem {
        /// Requested position.
        index: usize,
        /// Number of items in the collection.
        len: usize,
    },
}

/// Rank catalog items for a candidate.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and must not mutate
/// shared state while ranking: identical requests yield identical results.
pub trait Recommender: Send + Sync {
    /// Rank items for `request`, expanding quiz answers through `quiz`.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidWeights`] when the request weights are
    /// unusable; no partial result is produced.
    fn recommend(
        &self,
        request: &RecommendRequest,
        quiz: &QuizCatalogue,
    ) -> Result<Vec<Recommendation>, RecommendError>;
}
