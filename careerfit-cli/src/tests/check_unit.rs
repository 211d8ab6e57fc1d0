//! Unit tests for the readiness check.

use super::helpers::Workspace;
use super::*;
use crate::check::{CheckArgs, ReadinessReport, check};
use crate::setup::EngineConfig;
use careerfit_core::CollectionError;
use careerfit_data::DatasetError;
use rstest::rstest;

fn config_for(dataset: camino::Utf8PathBuf) -> EngineConfig {
    EngineConfig::try_from(CheckArgs {
        dataset: Some(dataset),
        ..CheckArgs::default()
    })
    .expect("config resolves")
}

#[rstest]
fn converting_without_dataset_errors() {
    let err = EngineConfig::try_from(CheckArgs::default()).expect_err("dataset is required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_DATASET);
            assert_eq!(env, ENV_CHECK_DATASET);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn check_reports_items_and_vocabulary() {
    let workspace = Workspace::new();
    let report = check(&config_for(workspace.postings())).expect("check succeeds");
    assert_eq!(report.status, "ok");
    assert_eq!(report.items, 3);
    assert!(report.vocabulary > 0);
    assert_eq!(report.quiz_questions, 2);
}

#[rstest]
fn check_report_serialises_fields() {
    let report = ReadinessReport {
        status: "ok",
        items: 3,
        vocabulary: 42,
        quiz_questions: 2,
    };
    let mut out = Vec::new();
    write_json(&mut out, &report).expect("write json");
    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(
        value,
        serde_json::json!({"status": "ok", "items": 3, "vocabulary": 42, "quiz_questions": 2})
    );
    assert!(out.ends_with(b"\n"));
}

#[rstest]
fn check_surfaces_schema_mismatch() {
    let workspace = Workspace::new();
    let dataset = workspace.write("partial.csv", "Job ID,Job Title\nJ1,Nurse\n");
    match check(&config_for(dataset)) {
        Err(CliError::Dataset(DatasetError::Collection {
            source: CollectionError::MissingTextFields { fields },
            ..
        })) => assert!(fields.contains(&"short_description".to_owned())),
        other => panic!("expected missing text fields, found {other:?}"),
    }
}

#[rstest]
fn check_reports_missing_dataset() {
    let workspace = Workspace::new();
    match check(&config_for(workspace.root().join("absent.csv"))) {
        Err(CliError::MissingSourceFile { field, .. }) => assert_eq!(field, ARG_DATASET),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}
