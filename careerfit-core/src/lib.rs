//! Core domain types for the Careerfit recommendation engine.
//!
//! The crate holds everything the ranking engine and its adapters share:
//! dataset schemas and the immutable item collection, candidate profiles,
//! the quiz bridge that turns quiz answers into query keywords, and the
//! [`Recommender`] seam adapters call into. Constructors validate eagerly so
//! configuration mistakes surface at startup rather than per request.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod item;
mod normalize;
mod profile;
mod quiz;
mod recommend;
mod schema;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use item::{CollectionError, Item, ItemCollection, ItemTable};
pub use normalize::{DOCUMENT_SEPARATOR, build_document, canonical_field_name};
pub use profile::{CandidateProfile, QuizAnswer};
pub use quiz::{
    MAX_QUIZ_WEIGHT, QuizCatalogue, QuizConfigError, QuizQuestionConfig, expand_quiz_answers,
    query_text,
};
pub use recommend::{
    ConstraintKind, ConstraintOutcome, ConstraintReason, ConstraintReasons, DEFAULT_RESULT_COUNT,
    FusionWeights, RecommendError, RecommendRequest, Recommendation, Recommender,
    WEIGHT_SUM_TOLERANCE,
};
pub use schema::DatasetSchema;
