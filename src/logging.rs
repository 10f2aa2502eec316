//! Tracing setup: human-readable records on stdout and in a log file.

use std::{fs::File, io, path::Path, sync::Mutex};

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be created.
    #[error("Failed to open log file: {0}")]
    File(#[from] io::Error),

    /// A global subscriber is already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber.
///
/// The file is truncated on every start. Both sinks carry the timestamp,
/// level, source file and line of each record.
pub fn init_tracing(log_file: &Path) -> Result<(), LoggingError> {
    let file = File::create(log_file)?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(io::stdout).with_file(true).with_line_number(true))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;
    Ok(())
}

/// Installs a stderr-only subscriber, for failures that happen before the
/// log file is known.
pub fn init_console_tracing() -> Result<(), LoggingError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(io::stderr).with_file(true).with_line_number(true))
        .try_init()?;
    Ok(())
}
