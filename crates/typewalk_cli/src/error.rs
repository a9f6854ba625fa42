//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;
use typewalk_ast::TraverseError;

/// Errors that can occur while running a `twalk` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Input path (`-` for stdin).
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The input is not valid JSON.
    #[error("Invalid JSON AST: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The AST violates the node schema.
    #[error("Traversal failed: {0}")]
    Traverse(#[from] TraverseError),
}

impl CliError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
