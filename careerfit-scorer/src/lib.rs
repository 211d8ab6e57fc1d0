//! Scoring and ranking for Careerfit catalog items.
//!
//! The crate provides the request-time half of the engine:
//! - **Content similarity** through a TF-IDF [`VectorIndex`] fitted once
//!   over every item document, with unigram and bigram terms and stop word
//!   removal for the configured [`Language`].
//! - **Constraint evaluation** of location, salary, difficulty and role
//!   preferences via [`ConstraintEvaluator`].
//! - **Popularity** min-max scaled from a configured column.
//! - A [`RankingEngine`] that fuses the three signals, drops items below
//!   [`MIN_CONTENT_SIMILARITY`] and returns the top results. It implements
//!   [`Recommender`](careerfit_core::Recommender).
//!
//! # Examples
//!
//! ```
//! use careerfit_core::{CandidateProfile, DatasetSchema, FusionWeights, ItemTable, QuizCatalogue};
//! use careerfit_scorer::{IndexSettings, RankingEngine};
//!
//! let table = ItemTable::new(["id", "title", "skills", "city"])
//!     .with_row(["1", "Data engineer", "spark sql pipelines", "Utrecht, NL"])
//!     .with_row(["2", "Data analyst", "sql dashboards", "Berlin, DE"]);
//! let schema = DatasetSchema::new("id", "title", ["skills"]).with_location_field("city");
//! let engine = RankingEngine::from_table(&table, &schema, &IndexSettings::default())
//!     .expect("engine builds");
//!
//! let profile = CandidateProfile::new("sql").with_preferred_location("utrecht");
//! let results = engine
//!     .recommend(&profile, 5, FusionWeights::default(), &QuizCatalogue::default())
//!     .expect("default weights are valid");
//! assert_eq!(results[0].item_id, "1");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analyzer;
mod constraints;
mod engine;
mod index;
mod popularity;
mod stopwords;

pub use analyzer::analyze;
pub use constraints::{ConstraintEvaluation, ConstraintEvaluator, NEUTRAL_SCORE, extract_number};
pub use engine::{EngineError, MIN_CONTENT_SIMILARITY, RankingEngine};
pub use index::{DEFAULT_MAX_FEATURES, IndexError, IndexSettings, SparseVector, VectorIndex};
pub use popularity::{PopularityScores, compute_popularity, normalise_scores};
pub use stopwords::Language;
