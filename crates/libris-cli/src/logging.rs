// Rust guideline compliant 2026-10-19

//! Log file setup for the Libris CLI.
//!
//! Inventory events reach `tracing` through the core `TracingSink`; this
//! module installs the subscriber that appends them to the log file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use thiserror::Error;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file or its directory could not be opened.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Installs a global subscriber appending to `log_file`.
///
/// Lines carry a timestamp, the level and the message, without ANSI colors.
///
/// # Arguments
///
/// * `log_file` - Path of the log file; parent directories are created
/// * `level` - Minimum level (error, warn, info, debug)
///
/// # Returns
///
/// The writer guard. Dropping it flushes and stops the background writer, so
/// keep it alive for the life of the process.
///
/// # Errors
///
/// Returns an error if the level is unknown or the file cannot be opened.
pub fn init(log_file: &Path, level: &str) -> Result<WorkerGuard, LoggingError> {
    let level = parse_log_level(level)?;

    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(log_file)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(guard)
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidLogLevel`] for anything but error, warn,
/// info or debug.
pub fn parse_log_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => Err(LoggingError::InvalidLogLevel(other.to_string())),
    }
}
