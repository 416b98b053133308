#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Collection of utilities for the abisig command-line tool.
//!
//! Each subcommand renders its output to a `String` here so the binary only
//! has to parse arguments and print.

use std::path::{Path, PathBuf};

use abi::{Abi, AbiError};
use config::{Config, ConfigError, OutputFormat};
use logging::LoggingError;
use registry::{SignatureRegistry, SignatureRegistryReader};
use serde::Serialize;
use signature::{is_callable, split_signature, split_types, SignatureSummary};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading the ABI failed
    #[error(transparent)]
    Abi(#[from] AbiError),
    /// Loading or saving configuration failed
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Logging could not be set up
    #[error(transparent)]
    Logging(#[from] LoggingError),
    /// Output could not be encoded as JSON
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
    /// Writing a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Neither `--input` nor `input.abi_path` was given
    #[error("No ABI input: pass --input <path> or set input.abi_path in the config")]
    MissingInput,
    /// A lookup matched nothing
    #[error("no descriptor matches '{0}'")]
    NotFound(String),
    /// Refusing to overwrite an existing file
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Both halves of a signature, as printed by `split`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitOutput {
    /// Bare name
    pub name: String,
    /// Raw type list
    pub types: String,
    /// Type list split on top-level commas
    pub parameters: Vec<String>,
}

/// Pick the ABI path: the command-line value, then the configured default.
pub fn resolve_input(cli_input: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    cli_input.or_else(|| config.input.abi_path.clone()).ok_or(CliError::MissingInput)
}

/// Render the signature of every descriptor in declaration order.
pub fn render_signatures(abi: &Abi, callables_only: bool, format: OutputFormat) -> Result<String> {
    let summaries: Vec<SignatureSummary> = abi
        .iter()
        .filter(|descriptor| !callables_only || is_callable(descriptor))
        .map(SignatureSummary::from_descriptor)
        .collect();
    render_summaries(&summaries, format)
}

/// Render the name and type list of a signature-or-name string.
pub fn render_split(input: &str, format: OutputFormat) -> Result<String> {
    let (name, types) = split_signature(input);
    let output = SplitOutput { name: name.to_string(), parameters: split_types(&types), types };
    match format {
        OutputFormat::Text => Ok(format!("name: {}\ntypes: {}\n", output.name, output.types)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&output)?)),
    }
}

/// Render the descriptors matching a full signature or bare name.
pub fn render_lookup(abi: &Abi, query: &str, format: OutputFormat) -> Result<String> {
    let registry = SignatureRegistry::from_abi(abi);
    let summaries: Vec<SignatureSummary> =
        registry.resolve(query).into_iter().map(SignatureSummary::from_descriptor).collect();
    if summaries.is_empty() {
        return Err(CliError::NotFound(query.to_string()));
    }
    render_summaries(&summaries, format)
}

/// Write `config` to `path`, creating parent directories.
pub fn write_config(config: &Config, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::AlreadyExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

fn render_summaries(summaries: &[SignatureSummary], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            Ok(summaries.iter().map(|summary| format!("{}\n", summary.signature)).collect())
        }
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(summaries)?)),
    }
}
