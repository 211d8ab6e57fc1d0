//! Behavioural coverage for loading datasets and quiz configuration.

use std::cell::RefCell;

use camino::Utf8PathBuf;
use careerfit_core::{CollectionError, DatasetSchema, ItemCollection, QuizAnswer, QuizCatalogue};
use careerfit_data::{DatasetError, load_dataset, load_quiz_catalogue};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

type Loaded<T> = RefCell<Option<Result<T, DatasetError>>>;

/// Temporary directory for each scenario.
#[fixture]
pub fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("create temporary directory: {err}"),
    }
}

/// Path of the file written by the scenario.
#[fixture]
pub fn file_path() -> RefCell<Option<Utf8PathBuf>> {
    RefCell::new(None)
}

/// Outcome of loading a dataset.
#[fixture]
pub fn collection() -> Loaded<ItemCollection> {
    RefCell::new(None)
}

/// Outcome of loading a quiz configuration.
#[fixture]
pub fn catalogue() -> Loaded<QuizCatalogue> {
    RefCell::new(None)
}

#[expect(
    clippy::expect_used,
    reason = "fixture initialisation should fail fast when the filesystem fails"
)]
fn write_file(temp_dir: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(temp_dir.path().join(name)).expect("utf8 path");
    std::fs::write(&path, contents).expect("write fixture file");
    path
}

fn recorded_path(file_path: &RefCell<Option<Utf8PathBuf>>) -> Utf8PathBuf {
    file_path
        .borrow()
        .clone()
        .unwrap_or_else(|| panic!("file path must be initialised"))
}

#[given("a job postings CSV file")]
fn postings_csv(temp_dir: &TempDir, file_path: &RefCell<Option<Utf8PathBuf>>) {
    let contents = "\
Job ID,Job Title,Short Description,Full Description,Responsibilities,Required Skills,Nice To Have Skills,Role Tags,Job Location,Salary Min,Difficulty,Views
J1,Data Scientist,Models,\"Python, pandas\",Analyse data,python,spark,Data; AI,\"Amsterdam, NL\",45000,3,120
J2,Nurse,Patient care,Ward shifts,Monitor patients,nursing,,Healthcare,Rotterdam,,2,
";
    *file_path.borrow_mut() = Some(write_file(temp_dir, "postings.csv", contents));
}

#[given("a CSV file without the responsibilities column")]
fn csv_without_responsibilities(temp_dir: &TempDir, file_path: &RefCell<Option<Utf8PathBuf>>) {
    let contents = "\
Job ID,Job Title,Short Description,Full Description,Required Skills,Nice To Have Skills,Role Tags
J1,Data Scientist,Models,Python,python,spark,Data
";
    *file_path.borrow_mut() = Some(write_file(temp_dir, "partial.csv", contents));
}

#[given("a quiz configuration that defines the same question twice")]
fn duplicate_quiz(temp_dir: &TempDir, file_path: &RefCell<Option<Utf8PathBuf>>) {
    let contents = r#"[
        {"id": "pref_domain", "answers": [{"answer": "data", "keywords": ["data"]}]},
        {"id": "pref_domain", "answers": [{"answer": "web", "keywords": ["web"]}]}
    ]"#;
    *file_path.borrow_mut() = Some(write_file(temp_dir, "quiz.json", contents));
}

#[given("a quiz configuration with an integer answer")]
fn integer_quiz(temp_dir: &TempDir, file_path: &RefCell<Option<Utf8PathBuf>>) {
    let contents = r#"[
        {"id": "years_experience", "weight": 2, "answers": [{"answer": 3, "keywords": ["senior", "lead"]}]}
    ]"#;
    *file_path.borrow_mut() = Some(write_file(temp_dir, "quiz.json", contents));
}

#[when("I load it with the job postings schema")]
fn load_postings(
    file_path: &RefCell<Option<Utf8PathBuf>>,
    collection: &Loaded<ItemCollection>,
) {
    let path = recorded_path(file_path);
    *collection.borrow_mut() = Some(load_dataset(&path, &DatasetSchema::jobs()));
}

#[when("I load the quiz configuration")]
fn load_quiz(file_path: &RefCell<Option<Utf8PathBuf>>, catalogue: &Loaded<QuizCatalogue>) {
    let path = recorded_path(file_path);
    *catalogue.borrow_mut() = Some(load_quiz_catalogue(&path));
}

#[then("the collection holds both postings in file order")]
fn both_postings(collection: &Loaded<ItemCollection>) {
    let borrowed = collection.borrow();
    let items = match borrowed.as_ref() {
        Some(Ok(items)) => items,
        Some(Err(err)) => panic!("dataset should load: {err}"),
        None => panic!("load outcome must be recorded"),
    };
    let ids: Vec<&str> = items.items().iter().map(|item| item.id()).collect();
    assert_eq!(ids, ["J1", "J2"]);
    let first = items.get(0).unwrap_or_else(|| panic!("first posting"));
    assert_eq!(first.attribute("job_location"), Some("Amsterdam, NL"));
    assert!(first.document().contains("Python, pandas"));
    let second = items.get(1).unwrap_or_else(|| panic!("second posting"));
    assert!(second.attribute("views").is_none());
}

#[then("loading fails naming the missing column")]
fn missing_column(collection: &Loaded<ItemCollection>) {
    match collection.borrow().as_ref() {
        Some(Err(DatasetError::Collection {
            source: CollectionError::MissingTextFields { fields },
            ..
        })) => assert_eq!(fields, &["responsibilities"]),
        other => panic!("expected missing text fields, got {other:?}"),
    }
}

#[then("loading fails naming the repeated question")]
fn repeated_question(catalogue: &Loaded<QuizCatalogue>) {
    match catalogue.borrow().as_ref() {
        Some(Err(DatasetError::DuplicateQuestion { id, .. })) => assert_eq!(id, "pref_domain"),
        other => panic!("expected duplicate question, got {other:?}"),
    }
}

#[then("the integer answer maps to its keywords")]
fn integer_answer(catalogue: &Loaded<QuizCatalogue>) {
    let borrowed = catalogue.borrow();
    let quiz = match borrowed.as_ref() {
        Some(Ok(quiz)) => quiz,
        Some(Err(err)) => panic!("quiz should load: {err}"),
        None => panic!("load outcome must be recorded"),
    };
    let question = quiz
        .get("years_experience")
        .unwrap_or_else(|| panic!("question registered"));
    assert_eq!(question.repetitions(), 2);
    assert_eq!(
        question.keywords(&QuizAnswer::Integer(3)),
        Some(["senior".to_owned(), "lead".to_owned()].as_slice())
    );
    assert!(question.keywords(&QuizAnswer::from("3")).is_none());
}

#[scenario(path = "tests/features/dataset_loading.feature", index = 0)]
fn postings_load(
    temp_dir: TempDir,
    file_path: RefCell<Option<Utf8PathBuf>>,
    collection: Loaded<ItemCollection>,
) {
    let _ = (temp_dir, file_path, collection);
}

#[scenario(path = "tests/features/dataset_loading.feature", index = 1)]
fn missing_text_column(
    temp_dir: TempDir,
    file_path: RefCell<Option<Utf8PathBuf>>,
    collection: Loaded<ItemCollection>,
) {
    let _ = (temp_dir, file_path, collection);
}

#[scenario(path = "tests/features/dataset_loading.feature", index = 2)]
fn duplicate_question(
    temp_dir: TempDir,
    file_path: RefCell<Option<Utf8PathBuf>>,
    catalogue: Loaded<QuizCatalogue>,
) {
    let _ = (temp_dir, file_path, catalogue);
}

#[scenario(path = "tests/features/dataset_loading.feature", index = 3)]
fn integer_answers(
    temp_dir: TempDir,
    file_path: RefCell<Option<Utf8PathBuf>>,
    catalogue: Loaded<QuizCatalogue>,
) {
    let _ = (temp_dir, file_path, catalogue);
}
