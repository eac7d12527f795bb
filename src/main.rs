//! # Legal Sentiment CLI (`lsa`)
//!
//! ## Usage
//!
//! ```bash
//! lsa --config ./config/lsa.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lsa classify [TEXT]` | Classify one text (argument, `--file`, or stdin) |
//! | `lsa analyze [PATHS...]` | Analyze files, directories, samples, or the configured source |
//! | `lsa lexicon` | Print the effective lexicon |
//!
//! ## Examples
//!
//! ```bash
//! # Try it on the built-in documents
//! lsa analyze --samples
//!
//! # Analyze a directory and export CSV
//! lsa analyze ./filings --export results.csv
//!
//! # JSON export to stdout
//! lsa analyze ./filings --export - --format json
//!
//! # Classify piped text
//! cat memo.txt | lsa classify --json
//! ```
//!
//! Set `RUST_LOG=debug` for diagnostic logging on stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use legal_sentiment::analyze::{self, DocumentSources, ExportRequest};
use legal_sentiment::config;
use legal_sentiment::export::{ExportFormat, DEFAULT_EXPORT_FILE};
use legal_sentiment::progress::ProgressMode;

/// Legal Sentiment CLI — rule-based sentiment analysis for legal documents.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. When the file does not exist, built-in defaults are used.
#[derive(Parser)]
#[command(
    name = "lsa",
    about = "Legal Sentiment — rule-based sentiment analysis for legal documents",
    version,
    long_about = "Classifies contracts, filings, and correspondence as Positive, Negative, or Neutral \
    using curated legal lexicons, with a confidence score, key phrases, and a summary per document."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/lsa.toml`. Lexicon overrides, the filesystem
    /// source, and export defaults are read from this file.
    #[arg(long, global = true, default_value = "./config/lsa.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single text.
    ///
    /// Reads TEXT, the file given with `--file`, or stdin, and prints the
    /// sentiment, confidence, scores, key phrases, and summary.
    Classify {
        /// Text to classify.
        text: Option<String>,

        /// Read the text from this file instead.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Analyze a set of documents.
    ///
    /// Loads `.txt` and `.csv` documents from the given paths (files or
    /// directories), the built-in samples, and/or the configured filesystem
    /// source, then prints per-label summary cards and per-document detail.
    Analyze {
        /// Files or directories to analyze.
        paths: Vec<PathBuf>,

        /// Include the built-in sample documents.
        #[arg(long)]
        samples: bool,

        /// Include the `[connectors.filesystem]` root from config.
        #[arg(long)]
        filesystem: bool,

        /// Treat each CSV record as its own document.
        #[arg(long)]
        csv_rows: bool,

        /// Export results to PATH (`-` for stdout).
        ///
        /// Without a value, exports to `[export].path` from config or
        /// `legal_sentiment_analysis_results.csv`. When the flag is absent,
        /// exports only if `[export].path` is configured.
        #[arg(long, num_args = 0..=1, value_name = "PATH")]
        export: Option<Option<PathBuf>>,

        /// Export format: `csv` or `json`. Defaults to `[export].format`.
        #[arg(long)]
        format: Option<String>,

        /// Skip the terminal report.
        #[arg(long, short)]
        quiet: bool,

        /// Progress output on stderr. Defaults to `human` on a TTY, else `off`.
        #[arg(long, value_enum)]
        progress: Option<ProgressMode>,
    },

    /// Print the effective lexicon in matching priority order.
    Lexicon,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_or_minimal(&cli.config)?;

    match cli.command {
        Commands::Classify { text, file, json } => {
            let input = analyze::read_input(text, file.as_deref())?;
            analyze::run_classify(&cfg, &input, json)?;
        }
        Commands::Analyze {
            paths,
            samples,
            filesystem,
            csv_rows,
            export,
            format,
            quiet,
            progress,
        } => {
            let sources = DocumentSources {
                paths,
                samples,
                filesystem,
                csv_rows,
            };
            let format: ExportFormat = format
                .as_deref()
                .unwrap_or(cfg.export.format.as_str())
                .parse()?;
            let export_path = match export {
                Some(Some(path)) => Some(path),
                Some(None) => Some(
                    cfg.export
                        .path
                        .clone()
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE)),
                ),
                None => cfg.export.path.clone(),
            };
            let export_request = export_path.map(|path| ExportRequest {
                format,
                path: if path.as_os_str() == "-" {
                    None
                } else {
                    Some(path)
                },
            });
            let progress = progress.unwrap_or_else(ProgressMode::default_for_tty);

            analyze::run_analyze(&cfg, &sources, export_request, quiet, progress)?;
        }
        Commands::Lexicon => {
            analyze::run_lexicon(&cfg)?;
        }
    }

    Ok(())
}
