//! Behavioural coverage for expanding quiz answers into query text.

use std::cell::RefCell;

use careerfit_core::{CandidateProfile, QuizCatalogue, QuizQuestionConfig, query_text};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Catalogue consulted by each scenario.
#[fixture]
pub fn catalogue() -> RefCell<QuizCatalogue> {
    RefCell::new(QuizCatalogue::new())
}

/// Profile under test.
#[fixture]
pub fn profile() -> RefCell<CandidateProfile> {
    RefCell::new(CandidateProfile::default())
}

/// Query text produced by the bridge.
#[fixture]
pub fn query() -> RefCell<Option<String>> {
    RefCell::new(None)
}

#[given("the stock quiz catalogue")]
fn stock_catalogue(catalogue: &RefCell<QuizCatalogue>) {
    *catalogue.borrow_mut() = QuizCatalogue::default();
}

#[given("a quiz catalogue whose domain question has weight 3.5")]
#[expect(
    clippy::expect_used,
    reason = "fixture initialisation should fail fast on invalid configuration"
)]
fn weighted_catalogue(catalogue: &RefCell<QuizCatalogue>) {
    let domain = QuizQuestionConfig::new("pref_domain", 3.5)
        .expect("valid question")
        .with_answer("data", ["data", "analytics"]);
    *catalogue.borrow_mut() = QuizCatalogue::default().with_question(domain);
}

#[given("a profile interested in python answering team to the work style question")]
fn team_profile(profile: &RefCell<CandidateProfile>) {
    *profile.borrow_mut() =
        CandidateProfile::new("python").with_quiz_answer("pref_work_style", "team");
}

#[given("a profile interested in python answering an unknown question")]
fn unknown_question_profile(profile: &RefCell<CandidateProfile>) {
    *profile.borrow_mut() =
        CandidateProfile::new("python").with_quiz_answer("favourite_language", "rust");
}

#[given("a profile interested in python answering data to the domain question")]
fn data_profile(profile: &RefCell<CandidateProfile>) {
    *profile.borrow_mut() = CandidateProfile::new("python").with_quiz_answer("pref_domain", "data");
}

#[when("I build the query text")]
fn build_query(
    catalogue: &RefCell<QuizCatalogue>,
    profile: &RefCell<CandidateProfile>,
    query: &RefCell<Option<String>>,
) {
    let text = query_text(&profile.borrow(), &catalogue.borrow());
    *query.borrow_mut() = Some(text);
}

fn recorded(query: &RefCell<Option<String>>) -> String {
    query
        .borrow()
        .clone()
        .unwrap_or_else(|| panic!("query text must be recorded"))
}

fn occurrences(text: &str, word: &str) -> usize {
    text.split_whitespace().filter(|token| *token == word).count()
}

#[then("the query text contains teamwork and collaboration exactly once each")]
fn keywords_once(query: &RefCell<Option<String>>) {
    let text = recorded(query);
    assert_eq!(occurrences(&text, "teamwork"), 1, "query was {text:?}");
    assert_eq!(occurrences(&text, "collaboration"), 1, "query was {text:?}");
    assert!(text.starts_with("python"));
}

#[then("the query text is just the interests")]
fn just_interests(query: &RefCell<Option<String>>) {
    assert_eq!(recorded(query), "python");
}

#[then("the domain keywords appear three times each")]
fn keywords_repeated(query: &RefCell<Option<String>>) {
    let text = recorded(query);
    assert_eq!(occurrences(&text, "data"), 3, "query was {text:?}");
    assert_eq!(occurrences(&text, "analytics"), 3, "query was {text:?}");
}

#[scenario(path = "tests/features/quiz_bridge.feature", index = 0)]
fn team_answer_expands_once(
    catalogue: RefCell<QuizCatalogue>,
    profile: RefCell<CandidateProfile>,
    query: RefCell<Option<String>>,
) {
    let _ = (catalogue, profile, query);
}

#[scenario(path = "tests/features/quiz_bridge.feature", index = 1)]
fn unknown_question_is_ignored(
    catalogue: RefCell<QuizCatalogue>,
    profile: RefCell<CandidateProfile>,
    query: RefCell<Option<String>>,
) {
    let _ = (catalogue, profile, query);
}

#[scenario(path = "tests/features/quiz_bridge.feature", index = 2)]
fn weighted_question_repeats(
    catalogue: RefCell<QuizCatalogue>,
    profile: RefCell<CandidateProfile>,
    query: RefCell<Option<String>>,
) {
    let _ = (catalogue, profile, query);
}
