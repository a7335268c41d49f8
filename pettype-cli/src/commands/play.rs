//! `pettype play` - run the quiz in the terminal.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Args;
use pettype_core::{
    AnalyticsSink, Content, HttpOutcomeStore, JsonlOutcomeStore, NoopAnalytics, NoopOutcomeStore,
    OutcomeStore, SessionController, Telemetry, TieBreak, TracingAnalytics,
};
use pettype_tui::{App, ThemeMode, install_panic_hook};
use tracing::info;

use crate::config::{ConfigLoader, OutcomeStoreKind, PettypeConfig, TelemetryConfig};

#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Colour theme (dark or light)
    #[arg(long)]
    pub theme: Option<ThemeMode>,

    /// How score ties are broken (random or answers)
    #[arg(long)]
    pub tie_break: Option<TieBreak>,

    /// Directory with questions.toml / results.toml overriding the bundled quiz
    #[arg(long)]
    pub content_dir: Option<PathBuf>,

    /// Record nothing: no page views, no outcomes
    #[arg(long)]
    pub no_telemetry: bool,
}

impl PlayArgs {
    /// Apply flags on top of the file configuration.
    pub fn apply(&self, config: &mut PettypeConfig) {
        if let Some(theme) = self.theme {
            config.ui.theme = theme;
        }
        if let Some(tie_break) = self.tie_break {
            config.quiz.tie_break = tie_break;
        }
        if let Some(dir) = &self.content_dir {
            config.quiz.content_dir = Some(dir.clone());
        }
        if self.no_telemetry {
            config.telemetry.analytics = false;
            config.telemetry.outcome_store = OutcomeStoreKind::None;
        }
    }
}

pub async fn run(args: PlayArgs) -> Result<()> {
    let mut config = ConfigLoader::load()?;
    args.apply(&mut config);

    let controller = build_controller(&config)?;
    info!(
        tie_break = %config.quiz.tie_break,
        theme = %config.ui.theme,
        store = %config.telemetry.outcome_store,
        "Starting quiz"
    );

    install_panic_hook();
    let mut app = App::new(controller, config.ui.theme);
    app.run().await.context("Terminal UI failed")?;
    Ok(())
}

/// Controller wired with content and telemetry from `config`.
pub fn build_controller(config: &PettypeConfig) -> Result<SessionController> {
    let content = Content::load(config.quiz.content_dir.as_deref())
        .context("Failed to load quiz content")?;
    let telemetry = build_telemetry(&config.telemetry)?;

    Ok(SessionController::new(content, telemetry)
        .with_loading_delay(Duration::from_millis(config.quiz.loading_delay_ms))
        .with_tie_break(config.quiz.tie_break))
}

pub fn build_telemetry(config: &TelemetryConfig) -> Result<Telemetry> {
    let analytics: Arc<dyn AnalyticsSink> = if config.analytics {
        Arc::new(TracingAnalytics)
    } else {
        Arc::new(NoopAnalytics)
    };

    let outcomes: Arc<dyn OutcomeStore> = match config.outcome_store {
        OutcomeStoreKind::Jsonl => Arc::new(JsonlOutcomeStore::new(outcomes_path(config))),
        OutcomeStoreKind::Http => {
            let Some(endpoint) = &config.endpoint else {
                bail!("telemetry.outcome_store = \"http\" requires telemetry.endpoint");
            };
            Arc::new(HttpOutcomeStore::new(endpoint.clone(), config.api_key.clone()))
        }
        OutcomeStoreKind::None => Arc::new(NoopOutcomeStore),
    };

    Ok(Telemetry::new(analytics, outcomes))
}

/// JSONL outcome file, falling back to the data directory.
pub fn outcomes_path(config: &TelemetryConfig) -> PathBuf {
    config
        .outcomes_path
        .clone()
        .unwrap_or_else(pettype_paths::outcomes_file)
}
