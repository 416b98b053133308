#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging utilities for abisig.
//!
//! Library crates emit `tracing` events and never install a subscriber; the
//! binary calls [`init`] once at startup.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors that can occur while setting up logging
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured level is not a valid filter directive
    #[error("Invalid log filter '{directive}': {source}")]
    Filter {
        /// The rejected directive
        directive: String,
        /// Parser error
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    /// The log file could not be opened for appending
    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        /// Path of the log file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
    /// A global subscriber is already installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Emits a trace event tagged with the calling module.
pub fn trace(module: &str, msg: &str) {
    tracing::trace!(module, "{}", msg);
}

/// Parse a filter directive such as `info` or `registry=debug,warn`.
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level)
        .map_err(|source| LoggingError::Filter { directive: level.to_string(), source })
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level` when it is set and valid. Output
/// goes to stderr, or is appended to `file` without ANSI colors.
pub fn init(level: &str, file: Option<&Path>) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(level)?,
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = match file {
        Some(path) => {
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::LogFile { path: path.to_path_buf(), source })?;
            builder.with_ansi(false).with_writer(Mutex::new(log_file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}
