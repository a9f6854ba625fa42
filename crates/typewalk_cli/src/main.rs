//! typewalk CLI
//!
//! Walks JSDoc type expression ASTs (the JSON trees JSDoc type parsers emit)
//! and reports their traversal order, node statistics and node schema.

mod config;
mod error;
mod output;
mod trace;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use serde_json::Value;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use typewalk_ast::NodeType;

use config::{OutputFormat, WalkConfig};
use error::CliError;

/// typewalk - Depth-first traversal of JSDoc type expression ASTs
#[derive(Parser)]
#[command(name = "twalk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (overrides the configuration file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the enter/leave sequence of an AST
    Walk {
        /// JSON AST file (`-` for stdin)
        input: PathBuf,
    },

    /// Print node counts of an AST
    Stats {
        /// JSON AST file (`-` for stdin)
        input: PathBuf,
    },

    /// Print the child properties of every node type
    Schema {
        /// Only show this node type (e.g. `FUNCTION`)
        node_type: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }

    match &cli.command {
        Commands::Walk { input } => run_walk(input, &config),
        Commands::Stats { input } => run_stats(input, &config),
        Commands::Schema { node_type } => run_schema(node_type.as_deref(), &config),
    }
}

fn load_config(path: Option<&Path>) -> Result<WalkConfig> {
    if let Some(path) = path {
        return WalkConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = WalkConfig::discover(".") {
        info!("Using config: {}", path.display());
        return WalkConfig::from_file(&path).into_diagnostic();
    }

    debug!("No config file found, using defaults");
    Ok(WalkConfig::new())
}

fn read_ast(input: &Path) -> Result<Value, CliError> {
    let content = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: input.to_path_buf(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(input).map_err(|source| CliError::Read {
            path: input.to_path_buf(),
            source,
        })?
    };

    debug!("Read {} bytes from {}", content.len(), input.display());
    Ok(serde_json::from_str(&content)?)
}

fn run_walk(input: &Path, config: &WalkConfig) -> Result<()> {
    let ast = read_ast(input).into_diagnostic()?;
    let lines = trace::trace(&ast)
        .map_err(CliError::from)
        .into_diagnostic()?;

    output::output_trace(&lines, config)
}

fn run_stats(input: &Path, config: &WalkConfig) -> Result<()> {
    let ast = read_ast(input).into_diagnostic()?;
    let stats = trace::stats(&ast)
        .map_err(CliError::from)
        .into_diagnostic()?;

    output::output_stats(&stats, config.format)
}

fn run_schema(node_type: Option<&str>, config: &WalkConfig) -> Result<()> {
    let node_types = match node_type {
        Some(tag) => vec![
            tag.parse::<NodeType>()
                .map_err(CliError::from)
                .into_diagnostic()?,
        ],
        None => NodeType::ALL.to_vec(),
    };

    output::output_schema(&node_types, config.format)
}
