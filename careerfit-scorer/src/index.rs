//! TF-IDF vector index over item documents.
//!
//! The index is fitted once at startup. Terms are unigrams and bigrams
//! produced by [`analyze`](crate::analyze); the vocabulary keeps the
//! `max_features` terms with the highest corpus frequency. Weights use raw
//! term counts and the smoothed inverse document frequency
//! `ln((1 + n) / (1 + df)) + 1`, and every vector is L2-normalised.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::{Language, analyze};

/// Default vocabulary cap.
pub const DEFAULT_MAX_FEATURES: usize = 8_000;

/// Errors raised while fitting the vector index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The configured analyzer language has no stop word list.
    #[error("unsupported analyzer language `{language}`")]
    UnsupportedLanguage {
        /// Language name as configured.
        language: String,
    },
    /// `max_features` was zero.
    #[error("max_features must be at least 1")]
    EmptyVocabularyCap,
    /// No document produced a single term.
    #[error("empty vocabulary; the documents contain only stop words or no text")]
    EmptyVocabulary,
}

/// Analyzer and vocabulary settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSettings {
    /// Stop word language.
    pub language: Language,
    /// Upper bound on the vocabulary size.
    pub max_features: usize,
}

impl IndexSettings {
    /// Build settings from their parts.
    #[must_use]
    pub const fn new(language: Language, max_features: usize) -> Self {
        Self {
            language,
            max_features,
        }
    }
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self::new(Language::English, DEFAULT_MAX_FEATURES)
    }
}

/// Sparse vector of `(term id, weight)` pairs sorted by term id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_weights(weights: BTreeMap<usize, f64>) -> Self {
        Self {
            entries: weights.into_iter().filter(|(_, w)| *w != 0.0).collect(),
        }
    }

    /// Non-zero entries in term id order.
    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the vector is all zeros.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean norm.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "norm is a sum of squares")]
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, w)| w * w)
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product with `other`.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "dot product accumulates products")]
    pub fn dot(&self, other: &Self) -> f64 {
        let mut left = self.entries.iter().peekable();
        let mut right = other.entries.iter().peekable();
        let mut sum = 0.0;
        while let (Some(&&(a, wa)), Some(&&(b, wb))) = (left.peek(), right.peek()) {
            match a.cmp(&b) {
                std::cmp::Ordering::Less => {
                    left.next();
                }
                std::cmp::Ordering::Greater => {
                    right.next();
                }
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    left.next();
                    right.next();
                }
            }
        }
        sum
    }

    /// Cosine similarity in `0.0..=1.0`; zero when either vector is empty.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "cosine divides by the norms")]
    pub fn cosine(&self, other: &Self) -> f64 {
        let denominator = self.norm() * other.norm();
        if denominator == 0.0 {
            return 0.0;
        }
        (self.dot(other) / denominator).clamp(0.0, 1.0)
    }

    #[expect(clippy::float_arithmetic, reason = "L2 normalisation divides by the norm")]
    fn normalised(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= norm;
            }
        }
        self
    }
}

/// Fitted TF-IDF index with one vector per document.
#[derive(Debug, Clone)]
pub struct VectorIndex {
    language: Language,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
}

impl VectorIndex {
    /// Fit the vocabulary and vectorise `documents`.
    ///
    /// # Errors
    /// Returns [`IndexError::EmptyVocabularyCap`] when `max_features` is zero
    /// and [`IndexError::EmptyVocabulary`] when no document yields a term.
    ///
    /// # Examples
    /// ```
    /// use careerfit_scorer::{IndexSettings, VectorIndex};
    ///
    /// let index = VectorIndex::build(&["rust services", "react interfaces"], &IndexSettings::default())
    ///     .expect("documents contain terms");
    /// let query = index.project("rust");
    /// let scores = index.similarity(&query);
    /// assert!(scores[0] > scores[1]);
    /// ```
    pub fn build<S: AsRef<str>>(
        documents: &[S],
        settings: &IndexSettings,
    ) -> Result<Self, IndexError> {
        if settings.max_features == 0 {
            return Err(IndexError::EmptyVocabularyCap);
        }
        let counts: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|document| term_counts(document.as_ref(), settings.language))
            .collect();

        let mut totals: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for document in &counts {
            for (term, count) in document {
                let entry = totals.entry(term.as_str()).or_default();
                entry.0 = entry.0.saturating_add(*count);
                entry.1 = entry.1.saturating_add(1);
            }
        }
        if totals.is_empty() {
            return Err(IndexError::EmptyVocabulary);
        }

        let mut ranked: Vec<(&str, usize, usize)> = totals
            .iter()
            .map(|(term, (total, df))| (*term, *total, *df))
            .collect();
        // Stable sort keeps alphabetical order among equally frequent terms.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(settings.max_features);
        ranked.sort_by(|a, b| a.0.cmp(b.0));

        let vocabulary: HashMap<String, usize> = ranked
            .iter()
            .enumerate()
            .map(|(id, (term, _, _))| ((*term).to_owned(), id))
            .collect();
        let idf: Vec<f64> = ranked
            .iter()
            .map(|(_, _, df)| smoothed_idf(documents.len(), *df))
            .collect();

        let mut index = Self {
            language: settings.language,
            vocabulary,
            idf,
            vectors: Vec::new(),
        };
        index.vectors = counts.iter().map(|terms| index.weigh(terms)).collect();

        log::info!(
            "fitted TF-IDF index over {} documents with {} terms ({})",
            index.vectors.len(),
            index.vocabulary.len(),
            settings.language
        );
        Ok(index)
    }

    /// Vectorise `text` against the fitted vocabulary.
    ///
    /// Terms outside the vocabulary are ignored, so text sharing nothing
    /// with the corpus projects to the empty vector.
    #[must_use]
    pub fn project(&self, text: &str) -> SparseVector {
        self.weigh(&term_counts(text, self.language))
    }

    /// Cosine similarity between `query` and every document, in order.
    #[must_use]
    pub fn similarity(&self, query: &SparseVector) -> Vec<f64> {
        self.vectors
            .iter()
            .map(|vector| query.cosine(vector))
            .collect()
    }

    /// Cosine similarity between every pair of stored vectors at `indices`.
    ///
    /// Entry `[i][j]` compares `indices[i]` with `indices[j]`, so the matrix
    /// is symmetric. Returns `None` when any index is out of range.
    #[must_use]
    pub fn pairwise_similarity(&self, indices: &[usize]) -> Option<Vec<Vec<f64>>> {
        let vectors: Vec<&SparseVector> = indices
            .iter()
            .map(|&position| self.vector(position))
            .collect::<Option<_>>()?;
        let matrix = vectors
            .iter()
            .map(|left| vectors.iter().map(|right| left.cosine(right)).collect())
            .collect();
        Some(matrix)
    }

    /// Vector of the document at `index`.
    #[must_use]
    pub fn vector(&self, index: usize) -> Option<&SparseVector> {
        self.vectors.get(index)
    }

    /// Number of indexed documents.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Report whether no documents were indexed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Number of terms kept in the vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Term id of `term`, if it is in the vocabulary.
    #[must_use]
    pub fn term_id(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "term weight is the raw count scaled by idf"
    )]
    fn weigh(&self, terms: &BTreeMap<String, usize>) -> SparseVector {
        let weights: BTreeMap<usize, f64> = terms
            .iter()
            .filter_map(|(term, count)| {
                let id = self.term_id(term)?;
                let idf = self.idf.get(id)?;
                Some((id, *count as f64 * idf))
            })
            .collect();
        SparseVector::from_weights(weights).normalised()
    }
}

fn term_counts(text: &str, language: Language) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for term in analyze(text, language) {
        let count: &mut usize = counts.entry(term).or_default();
        *count = count.saturating_add(1);
    }
    counts
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "smoothed idf is a logarithm of document count ratios"
)]
fn smoothed_idf(documents: usize, df: usize) -> f64 {
    ((1.0 + documents as f64) / (1.0 + df as f64)).ln() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn index() -> VectorIndex {
        VectorIndex::build(
            &[
                "python machine learning",
                "react frontend web",
                "rust backend web",
            ],
            &IndexSettings::default(),
        )
        .expect("documents contain terms")
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test uses float maths for assertions"
    )]
    fn document_vectors_are_unit_length(index: VectorIndex) {
        for id in 0..index.len() {
            let norm = index.vector(id).expect("vector").norm();
            assert!((norm - 1.0).abs() < 1e-12, "norm {norm}");
        }
    }

    #[rstest]
    fn assigns_term_ids_alphabetically(index: VectorIndex) {
        assert_eq!(index.term_id("backend"), Some(0));
        assert_eq!(index.term_id("web"), Some(index.vocabulary_size() - 1));
    }

    #[rstest]
    fn unrelated_query_projects_to_empty_vector(index: VectorIndex) {
        let query = index.project("nursing hospital");

        assert!(query.is_empty());
        assert!(index.similarity(&query).iter().all(|score| *score == 0.0));
    }

    #[rstest]
    fn closest_document_scores_highest(index: VectorIndex) {
        let scores = index.similarity(&index.project("machine learning with python"));

        assert!(scores[0] > 0.8, "scores {scores:?}");
        assert_eq!(scores[1], 0.0);
        assert_eq!(scores[2], 0.0);
    }

    #[rstest]
    fn rare_terms_weigh_more_than_shared_ones(index: VectorIndex) {
        let vector = index.vector(2).expect("rust document");
        let weight = |term: &str| {
            let id = index.term_id(term).expect("known term");
            vector
                .entries()
                .iter()
                .find(|(entry, _)| *entry == id)
                .map(|(_, value)| *value)
                .expect("term present")
        };

        assert!(weight("rust") > weight("web"));
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test uses float maths for assertions"
    )]
    fn pairwise_similarity_is_symmetric_with_unit_diagonal(index: VectorIndex) {
        let matrix = index.pairwise_similarity(&[1, 2, 1]).expect("known documents");

        assert_eq!(matrix.len(), 3);
        for (row, similarities) in matrix.iter().enumerate() {
            assert!((similarities[row] - 1.0).abs() < 1e-12);
            for (column, similarity) in similarities.iter().enumerate() {
                assert_eq!(*similarity, matrix[column][row]);
            }
        }
        assert!(matrix[0][1] > 0.0, "react and rust documents share `web`");
        assert!((matrix[0][2] - 1.0).abs() < 1e-12);
    }

    #[rstest]
    fn pairwise_similarity_rejects_unknown_documents(index: VectorIndex) {
        assert!(index.pairwise_similarity(&[0, 3]).is_none());
        assert_eq!(index.pairwise_similarity(&[]), Some(Vec::new()));
    }

    #[rstest]
    fn caps_vocabulary_by_corpus_frequency() {
        let settings = IndexSettings::new(Language::English, 1);
        let index = VectorIndex::build(&["web rust", "web react"], &settings).expect("terms");

        assert_eq!(index.vocabulary_size(), 1);
        assert_eq!(index.term_id("web"), Some(0));
    }

    #[rstest]
    fn ties_at_the_cap_prefer_alphabetical_terms() {
        let settings = IndexSettings::new(Language::English, 2);
        let index = VectorIndex::build(&["zeta alpha", "mid"], &settings).expect("terms");

        assert_eq!(index.term_id("alpha"), Some(0));
        assert_eq!(index.term_id("mid"), Some(1));
        assert!(index.term_id("zeta").is_none());
        assert!(index.term_id("zeta alpha").is_none());
    }

    #[rstest]
    #[case(&["the and of", ""])]
    #[case(&[])]
    fn rejects_corpus_without_terms(#[case] documents: &[&str]) {
        let err = VectorIndex::build(documents, &IndexSettings::default()).expect_err("no terms");
        assert_eq!(err, IndexError::EmptyVocabulary);
    }

    #[rstest]
    fn rejects_zero_vocabulary_cap() {
        let err = VectorIndex::build(&["rust"], &IndexSettings::new(Language::English, 0))
            .expect_err("zero cap");
        assert_eq!(err, IndexError::EmptyVocabularyCap);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test uses float maths for assertions"
    )]
    fn sparse_cosine_of_disjoint_vectors_is_zero() {
        let a = SparseVector::from_weights(BTreeMap::from([(0, 1.0)]));
        let b = SparseVector::from_weights(BTreeMap::from([(1, 1.0)]));
        assert_eq!(a.cosine(&b), 0.0);
        assert_eq!(a.cosine(&SparseVector::default()), 0.0);
        assert!((a.cosine(&a) - 1.0).abs() < 1e-12);
    }
}
