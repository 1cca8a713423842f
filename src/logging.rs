//! Tracing setup
//!
//! The interactive browser owns the terminal, so it logs to a file through a
//! non-blocking appender. Plain commands log to stderr. `RUST_LOG` always
//! takes precedence over the configured level.

use crate::VermapError;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "vermap.log";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// `vermap.log` inside the given directory
    File(PathBuf),
}

/// Keeps the file writer flushing until dropped
#[must_use = "dropping the guard stops log delivery"]
pub struct LoggingGuard {
    _worker: Option<WorkerGuard>,
}

/// Build the filter from `RUST_LOG`, falling back to `level`
///
/// `verbose` forces `debug` unless `RUST_LOG` is set.
#[must_use]
pub fn build_filter(level: &str, verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { level };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns `VermapError::Logging` if the log directory cannot be created or
/// a subscriber is already installed.
pub fn init_logging(level: &str, verbose: bool, target: LogTarget) -> Result<LoggingGuard, VermapError> {
    let filter = build_filter(level, verbose);

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(verbose)
                .with_writer(std::io::stderr)
                .compact()
                .try_init()
                .map_err(|e| VermapError::Logging(e.to_string()))?;
            Ok(LoggingGuard { _worker: None })
        }
        LogTarget::File(dir) => {
            fs::create_dir_all(&dir).map_err(|e| {
                VermapError::Logging(format!("Failed to create log directory {}: {e}", dir.display()))
            })?;
            let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|e| VermapError::Logging(e.to_string()))?;
            Ok(LoggingGuard {
                _worker: Some(guard),
            })
        }
    }
}
