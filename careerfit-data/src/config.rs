//! JSON configuration files: dataset schemas and quiz catalogues.

use std::collections::BTreeSet;
use std::io::BufReader;

use camino::Utf8Path;
use careerfit_core::{DatasetSchema, QuizCatalogue, QuizQuestionConfig};
use serde_json::from_reader;

use crate::{DatasetError, open_utf8_file};

fn read_json<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T, DatasetError> {
    let file = open_utf8_file(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    from_reader(BufReader::new(file)).map_err(|source| DatasetError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a [`DatasetSchema`] from a JSON object.
///
/// ```json
/// {
///   "id_field": "Job ID",
///   "title_field": "Job Title",
///   "text_fields": ["Short Description", "Required Skills"],
///   "location_field": "Job Location"
/// }
/// ```
///
/// # Errors
/// Returns [`DatasetError::Open`] or [`DatasetError::ParseJson`].
pub fn load_schema(path: &Utf8Path) -> Result<DatasetSchema, DatasetError> {
    read_json(path)
}

/// Load a quiz catalogue from a JSON list of questions.
///
/// ```json
/// [
///   {
///     "id": "pref_work_style",
///     "weight": 1.0,
///     "answers": [{ "answer": "team", "keywords": ["teamwork", "collaboration"] }]
///   }
/// ]
/// ```
///
/// # Errors
/// Returns [`DatasetError::Open`] or [`DatasetError::ParseJson`], and
/// [`DatasetError::DuplicateQuestion`] when two questions share an id.
pub fn load_quiz_catalogue(path: &Utf8Path) -> Result<QuizCatalogue, DatasetError> {
    let questions: Vec<QuizQuestionConfig> = read_json(path)?;
    let mut seen = BTreeSet::new();
    if let Some(repeated) = questions.iter().find(|q| !seen.insert(q.id().to_owned())) {
        return Err(DatasetError::DuplicateQuestion {
            path: path.to_path_buf(),
            id: repeated.id().to_owned(),
        });
    }
    log::info!("loaded {} quiz questions from {path}", questions.len());
    Ok(questions.into_iter().collect())
}
