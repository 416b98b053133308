//! abisig command-line tool
//!
//! Lists canonical signatures of a contract ABI, splits signatures into their
//! parts and looks descriptors up by signature or name.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;
use std::process::ExitCode;

use abi::Abi;
use abisig_cli::{
    render_lookup, render_signatures, render_split, resolve_input, write_config, CliError,
};
use clap::{Parser, Subcommand};
use config::{Config, OutputFormat};

/// Command-line interface configuration for abisig.
#[derive(Parser, Debug)]
#[command(name = "abisig", about = "Canonical signatures for contract ABIs", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log filter directive, overrides the configured level
    #[arg(long, global = true)]
    log_level: Option<String>,
}

/// Available abisig commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the signature of every descriptor in an ABI
    Signatures {
        /// ABI JSON file (bare array or build artifact)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Skip events
        #[arg(long)]
        callables_only: bool,
        /// Output format: text or json
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Split a signature into its name and type list
    Split {
        /// Signature or bare name, e.g. "transfer(address,uint256)"
        signature: String,
        /// Output format: text or json
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Find descriptors by full signature or bare name
    Lookup {
        /// Full signature or bare name
        query: String,
        /// ABI JSON file (bare array or build artifact)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output format: text or json
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Write a default configuration file
    InitConfig {
        /// Destination (defaults to the user config directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Main entry point for the abisig application.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Config::load_or_default(cli.config.as_deref())?;
    let level = cli.log_level.as_deref().unwrap_or(&settings.logging.level);
    logging::init(level, settings.logging.file.as_deref())?;
    tracing::debug!(config = ?cli.config, level, "starting abisig");

    match cli.cmd {
        Commands::Signatures { input, callables_only, format } => {
            let abi = Abi::from_file(&resolve_input(input, &settings)?)?;
            let callables_only = callables_only || settings.output.callables_only;
            let format = format.unwrap_or(settings.output.format);
            print!("{}", render_signatures(&abi, callables_only, format)?);
        }
        Commands::Split { signature, format } => {
            print!("{}", render_split(&signature, format.unwrap_or(settings.output.format))?);
        }
        Commands::Lookup { query, input, format } => {
            let abi = Abi::from_file(&resolve_input(input, &settings)?)?;
            let format = format.unwrap_or(settings.output.format);
            print!("{}", render_lookup(&abi, &query, format)?);
        }
        Commands::InitConfig { path, force } => {
            let path = match path {
                Some(path) => path,
                None => Config::default_path()?,
            };
            write_config(&Config::default(), &path, force)?;
            println!("Config written to {}", path.display());
        }
    }

    Ok(())
}
