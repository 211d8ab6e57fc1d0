//! Recommend command implementation for the Careerfit CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use careerfit_core::{CandidateProfile, DEFAULT_RESULT_COUNT, FusionWeights, Recommendation};
use careerfit_data::open_utf8_file;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::setup::{EngineConfig, EngineInputs, require_existing};
use crate::{
    ARG_ALPHA, ARG_BETA, ARG_DATASET, ARG_GAMMA, ARG_LANGUAGE, ARG_MAX_FEATURES, ARG_QUIZ,
    ARG_REQUEST, ARG_SCHEMA, CliError, ENV_RECOMMEND_DATASET, ENV_RECOMMEND_REQUEST,
    MAX_RESULT_COUNT, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the postings of a CSV dataset for the candidate \
                 described in a JSON request. The request holds the profile \
                 fields, an optional result count `k` and optional fusion \
                 weights that override the configured ones.",
    about = "Recommend postings for a candidate profile"
)]
#[ortho_config(prefix = "CAREERFIT")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing the recommendation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
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
    /// Weight of content similarity.
    #[arg(long = ARG_ALPHA, value_name = "weight")]
    #[serde(default)]
    pub(crate) alpha: Option<f64>,
    /// Weight of the constraint score.
    #[arg(long = ARG_BETA, value_name = "weight")]
    #[serde(default)]
    pub(crate) beta: Option<f64>,
    /// Weight of the popularity score.
    #[arg(long = ARG_GAMMA, value_name = "weight")]
    #[serde(default)]
    pub(crate) gamma: Option<f64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Dataset and index inputs.
    pub(crate) engine: EngineConfig,
    /// Weights used when the request does not carry its own.
    pub(crate) weights: FusionWeights,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)?;
        self.engine.validate_sources()
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;
        let defaults = FusionWeights::default();
        let weights = FusionWeights::new(
            args.alpha.unwrap_or(defaults.alpha),
            args.beta.unwrap_or(defaults.beta),
            args.gamma.unwrap_or(defaults.gamma),
        );
        let inputs = EngineInputs {
            dataset: args.dataset,
            schema: args.schema,
            quiz: args.quiz,
            language: args.language,
            max_features: args.max_features,
        };
        Ok(Self {
            request_path,
            engine: EngineConfig::resolve(inputs, ENV_RECOMMEND_DATASET)?,
            weights,
        })
    }
}

/// Request file contents: the profile fields plus ranking options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct RecommendRequestFile {
    #[serde(flatten)]
    pub(crate) profile: CandidateProfile,
    #[serde(default = "default_result_count")]
    pub(crate) k: usize,
    #[serde(default)]
    pub(crate) weights: Option<FusionWeights>,
}

const fn default_result_count() -> usize {
    DEFAULT_RESULT_COUNT
}

impl RecommendRequestFile {
    pub(crate) fn validate(&self) -> Result<(), CliError> {
        if (1..=MAX_RESULT_COUNT).contains(&self.k) {
            Ok(())
        } else {
            Err(CliError::InvalidResultCount {
                k: self.k,
                max: MAX_RESULT_COUNT,
            })
        }
    }
}

/// Output of `careerfit recommend`.
#[derive(Debug, Serialize)]
pub(crate) struct RecommendResponse {
    pub(crate) recommendations: Vec<Recommendation>,
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let response = execute_recommend(&config)?;
    write_json(writer, &response)
}

pub(crate) fn execute_recommend(config: &RecommendConfig) -> Result<RecommendResponse, CliError> {
    let request = load_request(&config.request_path)?;
    request.validate()?;
    let weights = request.weights.unwrap_or(config.weights);
    let loaded = config.engine.load()?;
    let recommendations = loaded
        .engine
        .recommend(&request.profile, request.k, weights, &loaded.quiz)
        .map_err(|source| CliError::Recommend { source })?;
    debug!(
        returned = recommendations.len(),
        k = request.k,
        "recommend command finished"
    );
    Ok(RecommendResponse { recommendations })
}

/// Loads a JSON-encoded request from disk.
pub(crate) fn load_request(path: &Utf8Path) -> Result<RecommendRequestFile, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
