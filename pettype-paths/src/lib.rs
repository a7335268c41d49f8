//! XDG Base Directory paths for pettype.
//!
//! The quiz keeps its config under `$XDG_CONFIG_HOME/pettype` and its
//! recorded outcomes and log file under `$XDG_DATA_HOME/pettype`, on every
//! platform.

use std::path::PathBuf;

const APP_DIR: &str = "pettype";

/// Get the pettype config directory.
///
/// Returns `$XDG_CONFIG_HOME/pettype` if set, otherwise `~/.config/pettype`.
///
/// # Examples
///
/// ```
/// use pettype_paths::config_dir;
///
/// let config = config_dir().join("config.toml");
/// assert!(config.ends_with("pettype/config.toml"));
/// ```
pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config")
}

/// Get the pettype data directory.
///
/// Returns `$XDG_DATA_HOME/pettype` if set, otherwise `~/.local/share/pettype`.
pub fn data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", ".local/share")
}

/// Path of the user config file.
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default location of the append-only outcome log.
pub fn outcomes_file() -> PathBuf {
    data_dir().join("outcomes.jsonl")
}

/// Log file used while the terminal UI owns stdout/stderr.
pub fn log_file() -> PathBuf {
    data_dir().join("pettype.log")
}

fn xdg_dir(var: &str, home_fallback: &str) -> PathBuf {
    if let Ok(base) = std::env::var(var)
        && !base.is_empty()
    {
        PathBuf::from(base).join(APP_DIR)
    } else if let Some(home) = dirs::home_dir() {
        home.join(home_fallback).join(APP_DIR)
    } else {
        PathBuf::from(home_fallback).join(APP_DIR)
    }
}
