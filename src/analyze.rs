//! `lsa analyze` and `lsa classify` orchestration.
//!
//! Collects documents from the requested sources, runs the batch analysis
//! with progress reporting, prints the report, and exports on request.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

use legal_sentiment_core::{batch, AnalysisRecord, Classifier, Document};

use crate::config::Config;
use crate::connector_fs;
use crate::export::{self, ExportFormat};
use crate::progress::{ProgressEvent, ProgressMode, ProgressReporter};
use crate::report;
use crate::samples;

/// Where `lsa analyze` reads documents from.
#[derive(Debug, Clone, Default)]
pub struct DocumentSources {
    /// Files or directories given on the command line.
    pub paths: Vec<PathBuf>,
    /// Include the built-in sample documents.
    pub samples: bool,
    /// Include the configured `[connectors.filesystem]` root.
    pub filesystem: bool,
    /// Split CSV files from `paths` into one document per record.
    pub csv_rows: bool,
}

/// Export settings resolved from CLI flags and `[export]` config.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: ExportFormat,
    /// `None` writes to stdout.
    pub path: Option<PathBuf>,
}

/// Gather documents from every requested source, in source order.
pub fn collect_documents(
    config: &Config,
    sources: &DocumentSources,
    progress: &dyn ProgressReporter,
) -> Result<Vec<Document>> {
    let mut docs = Vec::new();

    if sources.samples {
        progress.report(ProgressEvent::Loading {
            source: "samples".to_string(),
        });
        docs.extend(samples::sample_documents());
    }

    if sources.filesystem {
        progress.report(ProgressEvent::Loading {
            source: "filesystem".to_string(),
        });
        docs.extend(connector_fs::scan_filesystem(config)?);
    }

    if !sources.paths.is_empty() {
        for path in &sources.paths {
            progress.report(ProgressEvent::Loading {
                source: path.display().to_string(),
            });
        }
        docs.extend(connector_fs::load_paths(&sources.paths, sources.csv_rows)?);
    }

    Ok(docs)
}

/// Classifier over the configured lexicon.
pub fn build_classifier(config: &Config) -> Result<Classifier> {
    let classifier = Classifier::new(config.build_lexicon()?);
    tracing::debug!(entries = classifier.lexicon().len(), "lexicon ready");
    Ok(classifier)
}

/// Classify `documents` with the configured lexicon, reporting progress.
pub fn analyze_with_progress(
    config: &Config,
    documents: &[Document],
    progress: &dyn ProgressReporter,
) -> Result<Vec<AnalysisRecord>> {
    let classifier = build_classifier(config)?;
    let records = batch::analyze_all_with(&classifier, documents, |n, total| {
        progress.report(ProgressEvent::Analyzing {
            n: n as u64,
            total: total as u64,
        })
    });
    Ok(records)
}

pub fn run_analyze(
    config: &Config,
    sources: &DocumentSources,
    export_request: Option<ExportRequest>,
    quiet: bool,
    progress_mode: ProgressMode,
) -> Result<()> {
    let progress = progress_mode.reporter();

    let documents = collect_documents(config, sources, progress.as_ref())?;
    if documents.is_empty() {
        bail!("No documents to analyze. Pass file paths, --samples, or --filesystem.");
    }
    tracing::info!(documents = documents.len(), "starting analysis");

    let records = analyze_with_progress(config, &documents, progress.as_ref())?;

    let exporting_to_stdout = matches!(&export_request, Some(req) if req.path.is_none());
    if !quiet && !exporting_to_stdout {
        report::print_report(&records);
    }

    if let Some(req) = export_request {
        export::run_export(&records, req.format, req.path.as_deref())?;
    }

    Ok(())
}

/// Read the text for `lsa classify`: the argument, a file, or stdin.
pub fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(_), Some(_)) => bail!("Pass either TEXT or --file, not both"),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => connector_fs::read_text(path),
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .with_context(|| "Failed to read stdin")?;
            Ok(buf)
        }
    }
}

pub fn run_classify(config: &Config, text: &str, json: bool) -> Result<()> {
    let classifier = build_classifier(config)?;
    let result = classifier.classify(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render_result(&result));
    }
    Ok(())
}

/// Print the effective lexicon for `lsa lexicon`.
pub fn run_lexicon(config: &Config) -> Result<()> {
    let classifier = build_classifier(config)?;
    print!("{}", report::render_lexicon(classifier.lexicon()));
    Ok(())
}
