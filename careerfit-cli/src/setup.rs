//! Dataset and index options shared by the subcommands.

use camino::{Utf8Path, Utf8PathBuf};
use careerfit_core::{DatasetSchema, QuizCatalogue};
use careerfit_data::{file_is_file, load_dataset, load_quiz_catalogue, load_schema};
use careerfit_scorer::{DEFAULT_MAX_FEATURES, IndexSettings, Language, RankingEngine};
use tracing::info;

use crate::{ARG_DATASET, ARG_QUIZ, ARG_SCHEMA, CliError};

/// Dataset inputs as they arrive from the merged configuration layers.
#[derive(Debug, Clone, Default)]
pub(crate) struct EngineInputs {
    pub(crate) dataset: Option<Utf8PathBuf>,
    pub(crate) schema: Option<Utf8PathBuf>,
    pub(crate) quiz: Option<Utf8PathBuf>,
    pub(crate) language: Option<String>,
    pub(crate) max_features: Option<usize>,
}

/// Resolved inputs for building a [`RankingEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EngineConfig {
    /// CSV dataset to index.
    pub(crate) dataset: Utf8PathBuf,
    /// Optional JSON schema; the job postings schema applies otherwise.
    pub(crate) schema: Option<Utf8PathBuf>,
    /// Optional JSON quiz catalogue; the built-in questions apply otherwise.
    pub(crate) quiz: Option<Utf8PathBuf>,
    /// Index construction settings.
    pub(crate) settings: IndexSettings,
}

/// Engine and quiz catalogue ready to serve requests.
pub(crate) struct LoadedEngine {
    pub(crate) engine: RankingEngine,
    pub(crate) quiz: QuizCatalogue,
}

impl EngineConfig {
    /// Resolve merged inputs, reporting `env` when the dataset is missing.
    pub(crate) fn resolve(inputs: EngineInputs, env: &'static str) -> Result<Self, CliError> {
        let dataset = inputs.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env,
        })?;
        let language = inputs
            .language
            .as_deref()
            .map(str::parse::<Language>)
            .transpose()
            .map_err(CliError::InvalidLanguage)?
            .unwrap_or_default();
        let max_features = inputs.max_features.unwrap_or(DEFAULT_MAX_FEATURES);
        Ok(Self {
            dataset,
            schema: inputs.schema,
            quiz: inputs.quiz,
            settings: IndexSettings::new(language, max_features),
        })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.dataset, ARG_DATASET)?;
        if let Some(schema) = &self.schema {
            require_existing(schema, ARG_SCHEMA)?;
        }
        if let Some(quiz) = &self.quiz {
            require_existing(quiz, ARG_QUIZ)?;
        }
        Ok(())
    }

    /// Load every input and build the engine.
    pub(crate) fn load(&self) -> Result<LoadedEngine, CliError> {
        let schema = match &self.schema {
            Some(path) => load_schema(path)?,
            None => DatasetSchema::jobs(),
        };
        let quiz = match &self.quiz {
            Some(path) => load_quiz_catalogue(path)?,
            None => QuizCatalogue::default(),
        };
        let items = load_dataset(&self.dataset, &schema)?;
        let engine = RankingEngine::build(items, &self.settings)?;
        info!(
            dataset = %self.dataset,
            items = engine.len(),
            vocabulary = engine.vocabulary_size(),
            "ranking engine ready"
        );
        Ok(LoadedEngine { engine, quiz })
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
