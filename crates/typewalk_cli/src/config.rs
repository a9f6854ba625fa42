//! `twalk` configuration.

use std::fs;
use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Output format for every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Configuration for `twalk`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WalkConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Spaces per depth level in text output.
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Whether to print scalar payloads (names, literals, keys) next to tags.
    #[serde(default = "default_true")]
    pub show_values: bool,

    /// Whether `walk` prints leave events.
    #[serde(default = "default_true")]
    pub leave_events: bool,
}

fn default_indent() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl WalkConfig {
    /// Config file names, in lookup order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".typewalk.jsonc", ".typewalk.json"];

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            format: OutputFormat::default(),
            indent: default_indent(),
            show_values: true,
            leave_events: true,
        }
    }

    /// Returns the first config file found in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_jsonc(&content)
    }

    /// Parses configuration from JSON or JSONC text.
    ///
    /// An empty document yields the defaults.
    pub fn from_jsonc(text: &str) -> Result<Self, CliError> {
        let value = jsonc_parser::parse_to_serde_value(text, &ParseOptions::default())
            .map_err(|e| CliError::config(format!("Invalid JSONC: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        serde_json::from_value(value).map_err(|e| CliError::config(format!("Invalid config: {}", e)))
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self::new()
    }
}
