//! Errors raised while loading datasets and configuration files.

use std::io;

use camino::Utf8PathBuf;
use careerfit_core::CollectionError;
use thiserror::Error;

/// Errors returned by the dataset and configuration loaders.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        /// Path that was opened.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The CSV data could not be read.
    #[error("failed to read CSV from {path}: {source}")]
    Csv {
        /// Path of the CSV file.
        path: Utf8PathBuf,
        /// Underlying CSV failure.
        #[source]
        source: csv::Error,
    },
    /// A JSON configuration file could not be decoded.
    #[error("failed to parse JSON in {path}: {source}")]
    ParseJson {
        /// Path of the JSON file.
        path: Utf8PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The dataset does not fit the schema.
    #[error("dataset {path} does not match the schema: {source}")]
    Collection {
        /// Path of the CSV file.
        path: Utf8PathBuf,
        /// Underlying validation failure.
        #[source]
        source: CollectionError,
    },
    /// Two quiz questions share an identifier.
    #[error("quiz configuration {path} defines question `{id}` more than once")]
    DuplicateQuestion {
        /// Path of the quiz configuration file.
        path: Utf8PathBuf,
        /// Repeated question identifier.
        id: String,
    },
}
