//! Ranking engine: fuses content, constraint and popularity signals.
//!
//! The engine owns the item collection, the fitted [`VectorIndex`] and the
//! popularity vector. All three are built once and only read afterwards, so a
//! shared reference can serve concurrent requests.

use careerfit_core::{
    CandidateProfile, CollectionError, DatasetSchema, FusionWeights, Item, ItemCollection,
    ItemTable, QuizCatalogue, RecommendError, RecommendRequest, Recommendation, Recommender,
    query_text,
};
use thiserror::Error;

use crate::{
    ConstraintEvaluator, IndexError, IndexSettings, PopularityScores, VectorIndex,
    compute_popularity,
};

/// Items below this content similarity never appear in results.
pub const MIN_CONTENT_SIMILARITY: f64 = 0.08;

/// Errors raised while building a [`RankingEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The dataset does not fit the schema.
    #[error("invalid item collection: {source}")]
    Collection {
        /// Underlying validation failure.
        #[from]
        source: CollectionError,
    },
    /// The vector index could not be fitted.
    #[error("failed to build vector index: {source}")]
    Index {
        /// Underlying index failure.
        #[from]
        source: IndexError,
    },
}

/// Immutable ranking context built once at startup.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    items: ItemCollection,
    index: VectorIndex,
    popularity: PopularityScores,
}

impl RankingEngine {
    /// Index `items` and pre-compute their popularity.
    ///
    /// # Errors
    /// Returns [`EngineError::Index`] when the vector index cannot be fitted.
    pub fn build(items: ItemCollection, settings: &IndexSettings) -> Result<Self, EngineError> {
        let documents: Vec<&str> = items.items().iter().map(Item::document).collect();
        let index = VectorIndex::build(&documents, settings)?;
        let popularity = compute_popularity(&items);
        log::info!(
            "ranking engine ready with {} items and {} terms",
            items.len(),
            index.vocabulary_size()
        );
        Ok(Self {
            items,
            index,
            popularity,
        })
    }

    /// Validate `table` against `schema` and build the engine.
    ///
    /// # Errors
    /// Returns [`EngineError::Collection`] for schema mismatches and
    /// [`EngineError::Index`] when the vector index cannot be fitted.
    ///
    /// # Examples
    /// ```
    /// use careerfit_core::{CandidateProfile, DatasetSchema, FusionWeights, ItemTable, QuizCatalogue};
    /// use careerfit_scorer::{IndexSettings, RankingEngine};
    ///
    /// let table = ItemTable::new(["id", "title", "summary"])
    ///     .with_row(["1", "Backend developer", "Rust services and APIs"])
    ///     .with_row(["2", "Nurse", "Hospital patient care"]);
    /// let schema = DatasetSchema::new("id", "title", ["summary"]);
    /// let engine = RankingEngine::from_table(&table, &schema, &IndexSettings::default())
    ///     .expect("engine builds");
    ///
    /// let results = engine
    ///     .recommend(
    ///         &CandidateProfile::new("rust services"),
    ///         10,
    ///         FusionWeights::default(),
    ///         &QuizCatalogue::new(),
    ///     )
    ///     .expect("valid weights");
    /// assert_eq!(results.len(), 1);
    /// assert_eq!(results[0].item_id, "1");
    /// ```
    pub fn from_table(
        table: &ItemTable,
        schema: &DatasetSchema,
        settings: &IndexSettings,
    ) -> Result<Self, EngineError> {
        let items = ItemCollection::build(table, schema)?;
        Self::build(items, settings)
    }

    /// Indexed items.
    #[must_use]
    pub const fn items(&self) -> &ItemCollection {
        &self.items
    }

    /// Item at `index`, if any.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Number of indexed items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Report whether the engine holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of terms in the fitted vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.index.vocabulary_size()
    }

    /// Pre-computed popularity scores.
    #[must_use]
    pub const fn popularity(&self) -> &PopularityScores {
        &self.popularity
    }

    /// Rank items for `profile` and return at most `k` of them.
    ///
    /// Quiz answers are expanded through `quiz` and appended to the interests
    /// text. Items whose content similarity is below
    /// [`MIN_CONTENT_SIMILARITY`] are dropped whatever their other scores.
    /// The rest are ordered by final score, highest first; ties keep
    /// collection order.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidWeights`] when `weights` are not
    /// finite or do not sum to one.
    pub fn recommend(
        &self,
        profile: &CandidateProfile,
        k: usize,
        weights: FusionWeights,
        quiz: &QuizCatalogue,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let fusion = weights.validate()?;
        let query = self.index.project(&query_text(profile, quiz));
        let evaluator = ConstraintEvaluator::new(self.items.schema());

        let mut results: Vec<Recommendation> = self
            .index
            .similarity(&query)
            .into_iter()
            .zip(self.items.items())
            .enumerate()
            .filter(|(_, (content, _))| *content >= MIN_CONTENT_SIMILARITY)
            .map(|(index, (content, item))| {
                let constraints = evaluator.evaluate(item, profile);
                let popularity = self.popularity.get(index).unwrap_or_default();
                Recommendation {
                    index,
                    item_id: item.id().to_owned(),
                    title: item.title().to_owned(),
                    final_score: fusion.fuse(content, constraints.score, popularity),
                    content_similarity: content,
                    constraint_score: constraints.score,
                    popularity_score: popularity,
                    constraint_reasons: constraints.reasons,
                }
            })
            .collect();

        let candidates = results.len();
        results.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
        results.truncate(k);
        log::debug!(
            "ranked {candidates} relevant items out of {}, returning {}",
            self.items.len(),
            results.len()
        );
        Ok(results)
    }

    /// One minus the mean pairwise cosine similarity of the given items.
    ///
    /// Every unordered pair of distinct positions is counted once. Fewer
    /// than two indices score 0.0.
    ///
    /// # Errors
    /// Returns [`RecommendError::UnknownItem`] when an index is outside the
    /// collection.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "diversity is one minus an arithmetic mean"
    )]
    pub fn diversity_score(&self, indices: &[usize]) -> Result<f64, RecommendError> {
        if let Some(&index) = indices.iter().find(|&&position| position >= self.len()) {
            return Err(RecommendError::UnknownItem {
                index,
                len: self.len(),
            });
        }
        let matrix = self.index.pairwise_similarity(indices).unwrap_or_default();
        if matrix.len() < 2 {
            return Ok(0.0);
        }

        let mut total = 0.0;
        let mut pairs = 0_usize;
        for (row, similarities) in matrix.iter().enumerate() {
            for similarity in similarities.iter().skip(row + 1) {
                total += similarity;
                pairs += 1;
            }
        }
        Ok(1.0 - total / pairs as f64)
    }
}

impl Recommender for RankingEngine {
    fn recommend(
        &self,
        request: &RecommendRequest,
        quiz: &QuizCatalogue,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        Self::recommend(self, &request.profile, request.k, request.weights, quiz)
    }
}
