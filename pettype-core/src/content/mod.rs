//! Quiz content: the question bank and the result catalog.
//!
//! Both are loaded once at startup and shared read-only for the lifetime of
//! the process. The bundled TOML documents are compiled into the binary; a
//! content directory may replace either file.

mod questions;
mod results;

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

pub use questions::{AnswerOption, Question, QuestionBank};
pub use results::{MatchNote, Matches, ResultCatalog, ResultEntry};

use crate::error::ContentError;

/// File name of the question bank inside a content directory.
pub const QUESTIONS_FILE: &str = "questions.toml";

/// File name of the result catalog inside a content directory.
pub const RESULTS_FILE: &str = "results.toml";

const BUNDLED_QUESTIONS: &str = include_str!("../../content/questions.toml");
const BUNDLED_RESULTS: &str = include_str!("../../content/results.toml");

/// Validated, shareable quiz content.
#[derive(Debug, Clone)]
pub struct Content {
    pub questions: Arc<QuestionBank>,
    pub results: Arc<ResultCatalog>,
}

impl Content {
    pub fn new(questions: QuestionBank, results: ResultCatalog) -> Self {
        Self {
            questions: Arc::new(questions),
            results: Arc::new(results),
        }
    }

    /// Content compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Ok(Self::new(
            QuestionBank::from_toml(BUNDLED_QUESTIONS)?,
            ResultCatalog::from_toml(BUNDLED_RESULTS)?,
        ))
    }

    /// Load content, letting files in `dir` replace the bundled ones.
    ///
    /// A directory may provide only one of the two files; the other stays
    /// bundled. Any malformed file is an error.
    pub fn load(dir: Option<&Path>) -> Result<Self, ContentError> {
        let Some(dir) = dir else {
            return Self::bundled();
        };

        let questions = match read_optional(&dir.join(QUESTIONS_FILE))? {
            Some(source) => QuestionBank::from_toml(&source)?,
            None => QuestionBank::from_toml(BUNDLED_QUESTIONS)?,
        };
        let results = match read_optional(&dir.join(RESULTS_FILE))? {
            Some(source) => ResultCatalog::from_toml(&source)?,
            None => ResultCatalog::from_toml(BUNDLED_RESULTS)?,
        };

        info!(
            dir = %dir.display(),
            questions = questions.len(),
            results = results.len(),
            "Loaded quiz content"
        );
        Ok(Self::new(questions, results))
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, ContentError> {
    if !path.exists() {
        debug!(path = %path.display(), "Content file not found, using bundled copy");
        return Ok(None);
    }
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })
}
