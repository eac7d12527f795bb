//! TOML configuration.
//!
//! ```toml
//! [lexicon]
//! negative = ["breach", "default", "termination"]
//!
//! [connectors.filesystem]
//! root = "./docs"
//! include_globs = ["**/*.txt", "**/*.csv"]
//! csv_rows = false
//!
//! [export]
//! format = "csv"
//! path = "./out/results.csv"
//! ```
//!
//! Every section is optional. A bucket list under `[lexicon]` replaces the
//! built-in list for that bucket only.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use legal_sentiment_core::{Lexicon, Sentiment};

use crate::export::ExportFormat;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub connectors: ConnectorsConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LexiconConfig {
    #[serde(default)]
    pub positive: Option<Vec<String>>,
    #[serde(default)]
    pub negative: Option<Vec<String>>,
    #[serde(default)]
    pub neutral: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConnectorsConfig {
    pub filesystem: Option<FilesystemConnectorConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilesystemConnectorConfig {
    pub root: PathBuf,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Turn each CSV record into its own document instead of one per file.
    #[serde(default)]
    pub csv_rows: bool,
}

impl FilesystemConnectorConfig {
    /// Settings for ad-hoc paths given on the command line.
    pub fn for_root(root: PathBuf) -> Self {
        Self {
            root,
            include_globs: default_include_globs(),
            exclude_globs: Vec::new(),
            follow_symlinks: false,
            csv_rows: false,
        }
    }
}

pub fn default_include_globs() -> Vec<String> {
    vec!["**/*.txt".to_string(), "**/*.csv".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_export_format")]
    pub format: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_export_format(),
            path: None,
        }
    }
}

fn default_export_format() -> String {
    "csv".to_string()
}

impl Config {
    /// Configuration used when no config file exists.
    pub fn minimal() -> Self {
        Self::default()
    }

    /// Built-in legal lexicon with any configured bucket lists swapped in.
    pub fn build_lexicon(&self) -> Result<Lexicon> {
        let mut lexicon = Lexicon::legal();
        let overrides = [
            (Sentiment::Positive, &self.lexicon.positive),
            (Sentiment::Negative, &self.lexicon.negative),
            (Sentiment::Neutral, &self.lexicon.neutral),
        ];
        for (bucket, words) in overrides {
            if let Some(words) = words {
                lexicon = lexicon
                    .with_words(bucket, words.as_slice())
                    .with_context(|| "Invalid [lexicon] section")?;
            }
        }
        if lexicon.is_empty() {
            tracing::warn!("all [lexicon] lists are empty; every document will be Neutral");
        }
        Ok(lexicon)
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate lexicon
    config.build_lexicon()?;

    // Validate export
    config
        .export
        .format
        .parse::<ExportFormat>()
        .with_context(|| "Invalid [export] section")?;

    // Validate filesystem connector
    if let Some(fs) = &config.connectors.filesystem {
        if fs.include_globs.is_empty() {
            bail!("connectors.filesystem.include_globs must not be empty");
        }
    }

    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to [`Config::minimal`].
///
/// A file that exists but fails to parse or validate is still an error.
pub fn load_or_minimal(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        Ok(Config::minimal())
    }
}
