//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout/stderr while it runs, so `play` sends logs to
//! a file in the data directory through a non-blocking appender. Every other
//! subcommand logs to stderr.

use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Install the global subscriber.
///
/// For [`LogTarget::File`] the returned guard must stay alive until exit so
/// buffered lines are flushed.
pub fn init(verbose: bool, target: LogTarget) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
            None
        }
        LogTarget::File(path) => match file_writer(&path) {
            Ok((writer, guard)) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(writer)
                    .init();
                Some(guard)
            }
            // Writing to stderr would corrupt the UI
            Err(_) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(io::sink)
                    .init();
                None
            }
        },
    }
}

/// Non-blocking appender for `path`, creating its directory if needed.
fn file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard), InitError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("pettype.log");

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)?;
    Ok(tracing_appender::non_blocking(appender))
}
