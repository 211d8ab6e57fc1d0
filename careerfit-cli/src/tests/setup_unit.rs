//! Unit tests for resolving and validating the shared engine inputs.

use super::helpers::Workspace;
use super::*;
use crate::setup::{EngineConfig, EngineInputs};
use careerfit_scorer::{DEFAULT_MAX_FEATURES, IndexError, Language};
use rstest::rstest;

fn inputs(dataset: &str) -> EngineInputs {
    EngineInputs {
        dataset: Some(dataset.into()),
        ..EngineInputs::default()
    }
}

#[rstest]
fn resolve_applies_index_defaults() {
    let config = EngineConfig::resolve(inputs("postings.csv"), ENV_CHECK_DATASET)
        .expect("config resolves");
    assert_eq!(config.settings.language, Language::English);
    assert_eq!(config.settings.max_features, DEFAULT_MAX_FEATURES);
    assert!(config.schema.is_none());
    assert!(config.quiz.is_none());
}

#[rstest]
#[case("Dutch", Language::Dutch)]
#[case(" en ", Language::English)]
fn resolve_parses_language(#[case] name: &str, #[case] expected: Language) {
    let config = EngineConfig::resolve(
        EngineInputs {
            language: Some(name.to_owned()),
            ..inputs("postings.csv")
        },
        ENV_CHECK_DATASET,
    )
    .expect("config resolves");
    assert_eq!(config.settings.language, expected);
}

#[rstest]
fn resolve_rejects_unknown_language() {
    let err = EngineConfig::resolve(
        EngineInputs {
            language: Some("klingon".to_owned()),
            ..inputs("postings.csv")
        },
        ENV_CHECK_DATASET,
    )
    .expect_err("unknown language should error");
    match err {
        CliError::InvalidLanguage(IndexError::UnsupportedLanguage { language }) => {
            assert_eq!(language, "klingon");
        }
        other => panic!("expected InvalidLanguage, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let workspace = Workspace::new();
    let config = EngineConfig::resolve(inputs(workspace.root().as_str()), ENV_CHECK_DATASET)
        .expect("config resolves");
    match config.validate_sources() {
        Err(CliError::SourcePathNotFile { field, .. }) => assert_eq!(field, ARG_DATASET),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_checks_optional_schema() {
    let workspace = Workspace::new();
    let dataset = workspace.postings();
    let config = EngineConfig::resolve(
        EngineInputs {
            schema: Some(workspace.root().join("schema.json")),
            ..inputs(dataset.as_str())
        },
        ENV_CHECK_DATASET,
    )
    .expect("config resolves");
    match config.validate_sources() {
        Err(CliError::MissingSourceFile { field, .. }) => assert_eq!(field, ARG_SCHEMA),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn load_uses_custom_schema_and_quiz() {
    let workspace = Workspace::new();
    let dataset = workspace.write(
        "courses.csv",
        "Code,Name,Summary,Campus\nC1,Databases,sql query planning,Delft\nC2,Pottery,clay wheel glazing,Leiden\n",
    );
    let schema = workspace.write(
        "schema.json",
        r#"{"id_field": "code", "title_field": "name", "text_fields": ["summary"], "location_field": "campus"}"#,
    );
    let quiz = workspace.write(
        "quiz.json",
        r#"[{"id": "pref_topic", "answers": [{"answer": "data", "keywords": ["sql"]}]}]"#,
    );
    let config = EngineConfig::resolve(
        EngineInputs {
            schema: Some(schema),
            quiz: Some(quiz),
            ..inputs(dataset.as_str())
        },
        ENV_CHECK_DATASET,
    )
    .expect("config resolves");
    config.validate_sources().expect("sources exist");
    let loaded = config.load().expect("engine loads");
    assert_eq!(loaded.engine.len(), 2);
    assert_eq!(loaded.quiz.len(), 1);
    assert!(loaded.quiz.get("pref_topic").is_some());
}
