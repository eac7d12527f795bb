//! Export analysis records as CSV or JSON.
//!
//! CSV columns are `Document Name, Type, Sentiment, Confidence, Summary`,
//! with confidence rendered as `95%`. Fields containing the delimiter or
//! quotes are quoted by the CSV writer. JSON output is the pretty-printed
//! array of [`AnalysisRecord`]s.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::str::FromStr;

use legal_sentiment_core::AnalysisRecord;

/// File name used when exporting without an explicit path in config.
pub const DEFAULT_EXPORT_FILE: &str = "legal_sentiment_analysis_results.csv";

const CSV_HEADER: [&str; 5] = ["Document Name", "Type", "Sentiment", "Confidence", "Summary"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => bail!("Unknown export format: '{}'. Must be csv or json.", other),
        }
    }
}

/// Render records as CSV text, header first, rows separated by `\n`.
pub fn to_csv(records: &[AnalysisRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for r in records {
        let confidence = format!("{}%", r.result.confidence);
        writer.write_record([
            r.document_name.as_str(),
            r.document_type.as_str(),
            r.result.sentiment.as_str(),
            confidence.as_str(),
            r.result.summary.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn to_json(records: &[AnalysisRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn render(records: &[AnalysisRecord], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => to_csv(records),
        ExportFormat::Json => to_json(records),
    }
}

/// Export records to `output`, or to stdout when `output` is `None`.
pub fn run_export(
    records: &[AnalysisRecord],
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let body = render(records, format)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory {}", parent.display())
                    })?;
                }
            }
            std::fs::write(path, &body)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(records = records.len(), path = %path.display(), "exported results");
            eprintln!("Exported {} records to {}", records.len(), path.display());
        }
        None => {
            print!("{}", body);
            if !body.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
