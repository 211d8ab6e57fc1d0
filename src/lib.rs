//! Facade crate for the Careerfit recommendation engine.
//!
//! This crate re-exports the domain types and the ranking engine, and exposes
//! the CSV and JSON loaders behind the `csv` feature.

#![forbid(unsafe_code)]

pub use careerfit_core::{
    CandidateProfile, ConstraintKind, ConstraintOutcome, ConstraintReason, DatasetSchema,
    FusionWeights, Item, ItemCollection, ItemTable, QuizAnswer, QuizCatalogue,
    QuizQuestionConfig, RecommendError, RecommendRequest, Recommendation, Recommender,
};

pub use careerfit_scorer::{EngineError, IndexSettings, Language, RankingEngine};

#[cfg(feature = "csv")]
pub use careerfit_data::{DatasetError, load_dataset, load_quiz_catalogue, load_schema};
