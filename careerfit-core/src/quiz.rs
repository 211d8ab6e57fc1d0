//! Quiz bridge: turn structured quiz answers into extra query keywords.
//!
//! Each configured question maps answers to keyword lists. Answering a
//! question appends its keywords to the free-text interests, repeated
//! `max(weight, 1)` times (integer truncation) so heavier questions pull the
//! query vector further towards their vocabulary.

use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CandidateProfile, QuizAnswer};

/// Errors raised when a quiz question configuration is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuizConfigError {
    /// The question identifier was empty or whitespace.
    #[error("quiz question id must not be empty")]
    EmptyId,
    /// The repetition weight was NaN or infinite.
    #[error("quiz question `{id}` has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Identifier of the offending question.
        id: String,
        /// Weight as supplied.
        weight: f64,
    },
    /// The repetition weight exceeded [`MAX_QUIZ_WEIGHT`].
    #[error("quiz question `{id}` has weight {weight}, the maximum is {max}")]
    WeightTooLarge {
        /// Identifier of the offending question.
        id: String,
        /// Weight as supplied.
        weight: f64,
        /// Largest accepted weight.
        max: f64,
    },
}

/// Largest accepted question weight; keeps keyword repetition bounded.
pub const MAX_QUIZ_WEIGHT: f64 = 100.0;

/// Keyword expansion for one quiz question.
///
/// # Examples
/// ```
/// use careerfit_core::QuizQuestionConfig;
///
/// # fn main() -> Result<(), careerfit_core::QuizConfigError> {
/// let question = QuizQuestionConfig::new("pref_work_style", 2.7)?
///     .with_answer("team", ["teamwork", "collaboration"]);
/// assert_eq!(question.repetitions(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawQuizQuestion", into = "RawQuizQuestion")
)]
pub struct QuizQuestionConfig {
    id: String,
    answer_keywords: HashMap<QuizAnswer, Vec<String>>,
    weight: f64,
}

impl QuizQuestionConfig {
    /// Create a question with no answer mappings.
    ///
    /// # Errors
    /// Returns [`QuizConfigError::EmptyId`] for a blank identifier,
    /// [`QuizConfigError::NonFiniteWeight`] when `weight` is NaN or infinite
    /// and [`QuizConfigError::WeightTooLarge`] above [`MAX_QUIZ_WEIGHT`].
    pub fn new(id: impl Into<String>, weight: f64) -> Result<Self, QuizConfigError> {
        let question_id = id.into();
        if question_id.trim().is_empty() {
            return Err(QuizConfigError::EmptyId);
        }
        if !weight.is_finite() {
            return Err(QuizConfigError::NonFiniteWeight {
                id: question_id,
                weight,
            });
        }
        if weight > MAX_QUIZ_WEIGHT {
            return Err(QuizConfigError::WeightTooLarge {
                id: question_id,
                weight,
                max: MAX_QUIZ_WEIGHT,
            });
        }
        Ok(Self {
            id: question_id,
            answer_keywords: HashMap::new(),
            weight,
        })
    }

    /// Map an answer to its keywords, replacing any earlier mapping.
    pub fn insert_answer<I, S>(&mut self, answer: impl Into<QuizAnswer>, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answer_keywords
            .insert(answer.into(), keywords.into_iter().map(Into::into).collect());
    }

    /// Map an answer to its keywords while returning `self` for chaining.
    #[must_use]
    pub fn with_answer<I, S>(mut self, answer: impl Into<QuizAnswer>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_answer(answer, keywords);
        self
    }

    /// Question identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Weight as configured.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Keywords for `answer`, if the answer is mapped.
    #[must_use]
    pub fn keywords(&self, answer: &QuizAnswer) -> Option<&[String]> {
        self.answer_keywords.get(answer).map(Vec::as_slice)
    }

    /// How many times an answer's keywords are repeated.
    ///
    /// Always at least one: weights below one still contribute a single copy.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "weight is finite and at least 1.0, truncation is the intended rounding"
    )]
    pub fn repetitions(&self) -> usize {
        self.weight.max(1.0).trunc() as usize
    }
}

/// Serialised form of a quiz question.
///
/// Answers are listed as pairs because JSON object keys are always strings
/// and would lose the integer and boolean answer variants.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawQuizQuestion {
    id: String,
    #[serde(default = "default_weight")]
    weight: f64,
    #[serde(default)]
    answers: Vec<RawQuizAnswer>,
}

#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawQuizAnswer {
    answer: QuizAnswer,
    keywords: Vec<String>,
}

#[cfg(feature = "serde")]
const fn default_weight() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
impl TryFrom<RawQuizQuestion> for QuizQuestionConfig {
    type Error = QuizConfigError;

    fn try_from(raw: RawQuizQuestion) -> Result<Self, Self::Error> {
        let mut question = Self::new(raw.id, raw.weight)?;
        for entry in raw.answers {
            question.insert_answer(entry.answer, entry.keywords);
        }
        Ok(question)
    }
}

#[cfg(feature = "serde")]
impl From<QuizQuestionConfig> for RawQuizQuestion {
    fn from(question: QuizQuestionConfig) -> Self {
        let mut answers: Vec<RawQuizAnswer> = question
            .answer_keywords
            .into_iter()
            .map(|(answer, keywords)| RawQuizAnswer { answer, keywords })
            .collect();
        answers.sort_by(|left, right| left.answer.cmp(&right.answer));
        Self {
            id: question.id,
            weight: question.weight,
            answers,
        }
    }
}

/// Registered quiz questions keyed by identifier.
///
/// The default catalogue carries the two stock questions the front-end ships
/// with: `pref_work_style` and `pref_domain`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizCatalogue {
    questions: BTreeMap<String, QuizQuestionConfig>,
}

impl QuizCatalogue {
    /// Create an empty catalogue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            questions: BTreeMap::new(),
        }
    }

    /// Register a question, replacing any question with the same id.
    pub fn insert(&mut self, question: QuizQuestionConfig) {
        self.questions.insert(question.id.clone(), question);
    }

    /// Register a question while returning `self` for chaining.
    #[must_use]
    pub fn with_question(mut self, question: QuizQuestionConfig) -> Self {
        self.insert(question);
        self
    }

    /// Look up a question by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&QuizQuestionConfig> {
        self.questions.get(id)
    }

    /// Number of registered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Report whether no questions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuizCatalogue {
    fn default() -> Self {
        let work_style = QuizQuestionConfig {
            id: "pref_work_style".to_owned(),
            answer_keywords: HashMap::new(),
            weight: 1.0,
        }
        .with_answer("team", ["teamwork", "collaboration"])
        .with_answer("solo", ["independent", "autonomous"]);
        let domain = QuizQuestionConfig {
            id: "pref_domain".to_owned(),
            answer_keywords: HashMap::new(),
            weight: 1.0,
        }
        .with_answer("data", ["data", "analytics", "machine_learning"])
        .with_answer("web", ["web_development", "frontend", "backend"]);
        Self::new().with_question(work_style).with_question(domain)
    }
}

impl FromIterator<QuizQuestionConfig> for QuizCatalogue {
    fn from_iter<T: IntoIterator<Item = QuizQuestionConfig>>(iter: T) -> Self {
        let mut catalogue = Self::new();
        for question in iter {
            catalogue.insert(question);
        }
        catalogue
    }
}

/// Expand quiz answers into a space-separated keyword string.
///
/// Questions are visited in ascending id order. Unknown question ids and
/// answers without a keyword mapping are skipped silently.
///
/// # Examples
/// ```
/// use careerfit_core::{CandidateProfile, QuizCatalogue, expand_quiz_answers};
///
/// let profile = CandidateProfile::new("").with_quiz_answer("pref_work_style", "team");
/// let expanded = expand_quiz_answers(&profile.quiz_answers, &QuizCatalogue::default());
/// assert_eq!(expanded, "teamwork collaboration");
/// ```
#[must_use]
pub fn expand_quiz_answers(
    answers: &BTreeMap<String, QuizAnswer>,
    catalogue: &QuizCatalogue,
) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for (question_id, answer) in answers {
        let Some(question) = catalogue.get(question_id) else {
            continue;
        };
        let Some(keywords) = question.keywords(answer) else {
            continue;
        };
        for _ in 0..question.repetitions() {
            tokens.extend(keywords.iter().map(String::as_str));
        }
    }
    tokens.join(" ")
}

/// Full query text for a profile: interests followed by quiz keywords.
#[must_use]
pub fn query_text(profile: &CandidateProfile, catalogue: &QuizCatalogue) -> String {
    let expanded = expand_quiz_answers(&profile.quiz_answers, catalogue);
    format!("{} {expanded}", profile.interests_text)
        .trim()
        .to_owned()
}
