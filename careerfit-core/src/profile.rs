//! Candidate profiles: what a user tells the engine about themselves.
//!
//! Profiles are built per request and never persisted.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A user's answer to one quiz question.
///
/// JSON strings, integers and booleans decode into the matching variant, so
/// front-ends can submit `"team"`, `3` or `true` without wrapping.
///
/// # Examples
/// ```
/// use careerfit_core::QuizAnswer;
///
/// assert_eq!(QuizAnswer::from("team"), QuizAnswer::Text("team".into()));
/// assert_eq!(QuizAnswer::from(3_i64).to_string(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum QuizAnswer {
    /// A yes/no answer.
    Flag(bool),
    /// A numeric choice, such as a scale position.
    Integer(i64),
    /// A named option.
    Text(String),
}

impl fmt::Display for QuizAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for QuizAnswer {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for QuizAnswer {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for QuizAnswer {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for QuizAnswer {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Interests, constraints and quiz answers for one recommendation request.
///
/// # Examples
/// ```
/// use careerfit_core::{CandidateProfile, QuizAnswer};
///
/// let profile = CandidateProfile::new("rust backend services")
///     .with_preferred_location("Amsterdam")
///     .with_min_salary(40_000.0)
///     .with_role("engineering")
///     .with_quiz_answer("pref_work_style", "team");
/// assert_eq!(profile.preferred_location.as_deref(), Some("Amsterdam"));
/// assert_eq!(
///     profile.quiz_answers.get("pref_work_style"),
///     Some(&QuizAnswer::Text("team".into()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CandidateProfile {
    /// Free text describing skills, interests and technologies.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interests_text: String,
    /// Preferred location, matched as a case-insensitive substring.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred_location: Option<String>,
    /// Minimum acceptable salary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_salary: Option<f64>,
    /// Highest acceptable difficulty level.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_difficulty: Option<f64>,
    /// Role or domain tags the user is interested in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub role_include: Vec<String>,
    /// Quiz answers keyed by question identifier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub quiz_answers: BTreeMap<String, QuizAnswer>,
}

impl CandidateProfile {
    /// Create a profile holding only free-text interests.
    #[must_use]
    pub fn new(interests_text: impl Into<String>) -> Self {
        Self {
            interests_text: interests_text.into(),
            ..Self::default()
        }
    }

    /// Set the preferred location.
    #[must_use]
    pub fn with_preferred_location(mut self, location: impl Into<String>) -> Self {
        self.preferred_location = Some(location.into());
        self
    }

    /// Set the minimum salary.
    #[must_use]
    pub fn with_min_salary(mut self, salary: f64) -> Self {
        self.min_salary = Some(salary);
        self
    }

    /// Set the maximum difficulty.
    #[must_use]
    pub fn with_max_difficulty(mut self, difficulty: f64) -> Self {
        self.max_difficulty = Some(difficulty);
        self
    }

    /// Add a desired role or domain tag.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role_include.push(role.into());
        self
    }

    /// Record the answer to a quiz question, replacing any earlier answer.
    #[must_use]
    pub fn with_quiz_answer(
        mut self,
        question_id: impl Into<String>,
        answer: impl Into<QuizAnswer>,
    ) -> Self {
        self.quiz_answers.insert(question_id.into(), answer.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn later_answers_replace_earlier_ones() {
        let profile = CandidateProfile::new("")
            .with_quiz_answer("q", "first")
            .with_quiz_answer("q", "second");

        assert_eq!(profile.quiz_answers.len(), 1);
        assert_eq!(profile.quiz_answers.get("q"), Some(&QuizAnswer::from("second")));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#""team""#, QuizAnswer::Text("team".into()))]
    #[case("4", QuizAnswer::Integer(4))]
    #[case("true", QuizAnswer::Flag(true))]
    fn answers_decode_untagged(#[case] json: &str, #[case] expected: QuizAnswer) {
        let answer: QuizAnswer = serde_json::from_str(json).expect("decode answer");
        assert_eq!(answer, expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn profile_decodes_with_defaults() {
        let json = r#"{"interests_text":"python data","quiz_answers":{"pref_domain":"data"}}"#;
        let profile: CandidateProfile = serde_json::from_str(json).expect("decode profile");

        assert_eq!(profile.interests_text, "python data");
        assert!(profile.preferred_location.is_none());
        assert!(profile.role_include.is_empty());
        assert_eq!(
            profile.quiz_answers.get("pref_domain"),
            Some(&QuizAnswer::from("data"))
        );
    }
}
