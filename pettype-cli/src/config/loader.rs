use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::types::{
    DEFAULT_LOADING_DELAY_MS, PettypeConfig, QuizConfig, RawPettypeConfig, RawQuizConfig,
    RawTelemetryConfig, RawUiConfig, TelemetryConfig, UiConfig,
};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<PettypeConfig> {
        Self::load_from(&Self::user_config_path(), &Self::project_config_path())
    }

    /// Load and merge the two layers from explicit paths; missing files are skipped.
    pub fn load_from(user_path: &Path, project_path: &Path) -> Result<PettypeConfig> {
        let mut raw = RawPettypeConfig::default();

        // Layer 1: User config
        if let Some(user) = Self::read_layer(user_path)? {
            raw = Self::merge_raw(raw, user);
        }

        // Layer 2: Project config
        if let Some(project) = Self::read_layer(project_path)? {
            raw = Self::merge_raw(raw, project);
        }

        Ok(Self::finalize(raw))
    }

    /// User config path (`$XDG_CONFIG_HOME/pettype/config.toml`)
    pub fn user_config_path() -> PathBuf {
        pettype_paths::config_file()
    }

    /// Project config path
    ///
    /// Overridable with `PETTYPE_PROJECT_CONFIG_DIR`.
    pub fn project_config_path() -> PathBuf {
        match std::env::var("PETTYPE_PROJECT_CONFIG_DIR") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join("config.toml"),
            _ => PathBuf::from(".pettype/config.toml"),
        }
    }

    fn read_layer(path: &Path) -> Result<Option<RawPettypeConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let raw = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config layer");
        Ok(Some(raw))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawPettypeConfig, overlay: RawPettypeConfig) -> RawPettypeConfig {
        RawPettypeConfig {
            quiz: RawQuizConfig {
                loading_delay_ms: overlay.quiz.loading_delay_ms.or(base.quiz.loading_delay_ms),
                tie_break: overlay.quiz.tie_break.or(base.quiz.tie_break),
                content_dir: overlay.quiz.content_dir.or(base.quiz.content_dir),
            },
            ui: RawUiConfig {
                theme: overlay.ui.theme.or(base.ui.theme),
            },
            telemetry: RawTelemetryConfig {
                analytics: overlay.telemetry.analytics.or(base.telemetry.analytics),
                outcome_store: overlay
                    .telemetry
                    .outcome_store
                    .or(base.telemetry.outcome_store),
                outcomes_path: overlay
                    .telemetry
                    .outcomes_path
                    .or(base.telemetry.outcomes_path),
                endpoint: overlay.telemetry.endpoint.or(base.telemetry.endpoint),
                api_key: overlay.telemetry.api_key.or(base.telemetry.api_key),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawPettypeConfig) -> PettypeConfig {
        let telemetry_defaults = TelemetryConfig::default();
        PettypeConfig {
            quiz: QuizConfig {
                loading_delay_ms: raw.quiz.loading_delay_ms.unwrap_or(DEFAULT_LOADING_DELAY_MS),
                tie_break: raw.quiz.tie_break.unwrap_or_default(),
                content_dir: raw.quiz.content_dir,
            },
            ui: UiConfig {
                theme: raw.ui.theme.unwrap_or_default(),
            },
            telemetry: TelemetryConfig {
                analytics: raw
                    .telemetry
                    .analytics
                    .unwrap_or(telemetry_defaults.analytics),
                outcome_store: raw.telemetry.outcome_store.unwrap_or_default(),
                outcomes_path: raw.telemetry.outcomes_path,
                endpoint: raw.telemetry.endpoint,
                api_key: raw.telemetry.api_key,
            },
        }
    }
}
