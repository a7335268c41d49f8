use std::fmt;
use std::path::PathBuf;

use pettype_core::{DEFAULT_LOADING_DELAY, TieBreak};
use pettype_tui::ThemeMode;
use serde::{Deserialize, Serialize};

/// Configuration as stored in TOML files (optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPettypeConfig {
    #[serde(default)]
    pub quiz: RawQuizConfig,

    #[serde(default)]
    pub ui: RawUiConfig,

    #[serde(default)]
    pub telemetry: RawTelemetryConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawQuizConfig {
    pub loading_delay_ms: Option<u64>,
    pub tie_break: Option<TieBreak>,
    pub content_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawUiConfig {
    pub theme: Option<ThemeMode>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawTelemetryConfig {
    pub analytics: Option<bool>,
    pub outcome_store: Option<OutcomeStoreKind>,
    pub outcomes_path: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PettypeConfig {
    #[serde(default)]
    pub quiz: QuizConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Time on the loading screen before the result is shown
    pub loading_delay_ms: u64,

    pub tie_break: TieBreak,

    /// Directory whose questions.toml / results.toml replace the bundled content
    pub content_dir: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
            tie_break: TieBreak::default(),
            content_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    pub theme: ThemeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Emit page-view events
    pub analytics: bool,

    pub outcome_store: OutcomeStoreKind,

    /// JSONL file for the `jsonl` store; defaults to the data directory
    pub outcomes_path: Option<PathBuf>,

    /// Endpoint for the `http` store
    pub endpoint: Option<String>,

    pub api_key: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            analytics: true,
            outcome_store: OutcomeStoreKind::default(),
            outcomes_path: None,
            endpoint: None,
            api_key: None,
        }
    }
}

/// Where completed sessions are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStoreKind {
    #[default]
    Jsonl,
    Http,
    None,
}

impl fmt::Display for OutcomeStoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutcomeStoreKind::Jsonl => "jsonl",
            OutcomeStoreKind::Http => "http",
            OutcomeStoreKind::None => "none",
        })
    }
}

/// Default loading delay in milliseconds
pub const DEFAULT_LOADING_DELAY_MS: u64 = DEFAULT_LOADING_DELAY.as_millis() as u64;
