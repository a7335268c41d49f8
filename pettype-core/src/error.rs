//! Error types for pettype-core

use std::path::PathBuf;

use thiserror::Error;

use crate::personality::TypeCode;

/// Top-level error type for pettype-core
#[derive(Error, Debug)]
pub enum PettypeError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
}

/// Malformed quiz content. Always fatal at startup.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: toml::de::Error,
    },

    #[error("Question bank has no questions")]
    NoQuestions,

    #[error("Question {question} has an empty prompt")]
    EmptyPrompt { question: usize },

    #[error("Question {question} has no options")]
    NoOptions { question: usize },

    #[error("Option {option} of question {question} has no text")]
    EmptyOption { question: usize, option: usize },

    #[error("Default result {0} is missing from the result catalog")]
    MissingDefault(TypeCode),
}

/// Errors from analytics sinks and outcome stores.
///
/// These are logged and dropped; they never reach the quiz flow.
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Outcome store rejected the write with status {status}")]
    Rejected { status: u16 },
}
