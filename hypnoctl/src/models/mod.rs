use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How query results are written to stdout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One aligned row per project plus a result-count line
    #[default]
    Table,
    /// Pretty-printed JSON, suitable for piping
    Json,
}

/// Source that produced the CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CliConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// User-tunable defaults for `hypnoctl`. Command-line flags override every
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output format used when `--format` is not given.
    pub output: OutputFormat,
    /// Number of tags shown per row in table output. The site's cards show
    /// three.
    pub tag_preview: usize,
    /// `tracing` filter directive applied when `RUST_LOG` is unset.
    pub log_filter: String,
    /// JSON catalog to browse instead of the built-in portfolio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Table,
            tag_preview: 3,
            log_filter: "warn".to_string(),
            catalog_path: None,
        }
    }
}
