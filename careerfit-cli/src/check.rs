//! Readiness check: load the dataset and build the index without ranking.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::setup::{EngineConfig, EngineInputs};
use crate::{
    ARG_DATASET, ARG_LANGUAGE, ARG_MAX_FEATURES, ARG_QUIZ, ARG_SCHEMA, CliError,
    ENV_CHECK_DATASET, write_json,
};

/// CLI arguments for the `check` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load the dataset, schema and quiz catalogue, build the \
                 TF-IDF index and print a JSON readiness report.",
    about = "Verify that a dataset can be served"
)]
#[ortho_config(prefix = "CAREERFIT")]
pub(crate) struct CheckArgs {
    /// Path to the CSV dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Path to a JSON dataset schema (job postings layout when omitted).
    #[arg(long = ARG_SCHEMA, value_name = "path")]
    #[serde(default)]
    pub(crate) schema: Option<Utf8PathBuf>,
    /// Path to a JSON quiz catalogue (built-in questions when omitted).
    #[arg(long = ARG_QUIZ, value_name = "path")]
    #[serde(default)]
    pub(crate) quiz: Option<Utf8PathBuf>,
    /// Stop word language, `english` or `dutch`.
    #[arg(long = ARG_LANGUAGE, value_name = "name")]
    #[serde(default)]
    pub(crate) language: Option<String>,
    /// Upper bound on the vocabulary size.
    #[arg(long = ARG_MAX_FEATURES, value_name = "count")]
    #[serde(default)]
    pub(crate) max_features: Option<usize>,
}

impl TryFrom<CheckArgs> for EngineConfig {
    type Error = CliError;

    fn try_from(args: CheckArgs) -> Result<Self, Self::Error> {
        let inputs = EngineInputs {
            dataset: args.dataset,
            schema: args.schema,
            quiz: args.quiz,
            language: args.language,
            max_features: args.max_features,
        };
        Self::resolve(inputs, ENV_CHECK_DATASET)
    }
}

/// Summary printed by `careerfit check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ReadinessReport {
    pub(crate) status: &'static str,
    pub(crate) items: usize,
    pub(crate) vocabulary: usize,
    pub(crate) quiz_questions: usize,
}

pub(crate) fn run_check_with(args: CheckArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = EngineConfig::try_from(merged)?;
    let report = check(&config)?;
    write_json(writer, &report)
}

pub(crate) fn check(config: &EngineConfig) -> Result<ReadinessReport, CliError> {
    config.validate_sources()?;
    let loaded = config.load()?;
    Ok(ReadinessReport {
        status: "ok",
        items: loaded.engine.len(),
        vocabulary: loaded.engine.vocabulary_size(),
        quiz_questions: loaded.quiz.len(),
    })
}
