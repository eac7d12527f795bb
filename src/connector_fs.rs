//! Filesystem document loader.
//!
//! Turns `.txt` and `.csv` files into [`Document`]s. Directories are walked
//! with include/exclude globs; single files are taken as given. A CSV file
//! is one document by default, or one document per record when
//! `csv_rows` is enabled.

use anyhow::{bail, Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use legal_sentiment_core::Document;

use crate::config::{Config, FilesystemConnectorConfig};

pub const TYPE_TEXT: &str = "Text";
pub const TYPE_CSV: &str = "CSV";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Load every document under the configured `[connectors.filesystem]` root.
pub fn scan_filesystem(config: &Config) -> Result<Vec<Document>> {
    let fs_config = config
        .connectors
        .filesystem
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Filesystem connector not configured"))?;

    scan_root(fs_config)
}

/// Load documents from paths given on the command line.
///
/// Files are loaded regardless of extension; directories are walked with
/// the default globs. `csv_rows` applies to every CSV file found.
pub fn load_paths(paths: &[PathBuf], csv_rows: bool) -> Result<Vec<Document>> {
    let mut docs = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut fs_config = FilesystemConnectorConfig::for_root(path.clone());
            fs_config.csv_rows = csv_rows;
            docs.extend(scan_root(&fs_config)?);
        } else if path.is_file() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            docs.extend(file_to_documents(path, &name, csv_rows)?);
        } else {
            bail!("Path does not exist: {}", path.display());
        }
    }
    Ok(docs)
}

fn scan_root(fs_config: &FilesystemConnectorConfig) -> Result<Vec<Document>> {
    let root = &fs_config.root;
    if !root.exists() {
        bail!(
            "Filesystem connector root does not exist: {}",
            root.display()
        );
    }

    let include_set = build_globset(&fs_config.include_globs)?;

    let mut default_excludes = vec![
        "**/.git/**".to_string(),
        "**/target/**".to_string(),
        "**/node_modules/**".to_string(),
    ];
    default_excludes.extend(fs_config.exclude_globs.clone());
    let exclude_set = build_globset(&default_excludes)?;

    let mut files = Vec::new();

    let walker = WalkDir::new(root).follow_links(fs_config.follow_symlinks);
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if exclude_set.is_match(&rel_str) {
            tracing::trace!(path = %rel_str, "excluded");
            continue;
        }

        if !include_set.is_match(&rel_str) {
            continue;
        }

        files.push((path.to_path_buf(), rel_str));
    }

    // Sort for deterministic ordering
    files.sort_by(|a, b| a.1.cmp(&b.1));

    let mut docs = Vec::new();
    for (path, rel_str) in &files {
        docs.extend(file_to_documents(path, rel_str, fs_config.csv_rows)?);
    }

    tracing::debug!(
        root = %root.display(),
        files = files.len(),
        documents = docs.len(),
        "scanned filesystem"
    );

    Ok(docs)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

fn file_to_documents(path: &Path, name: &str, csv_rows: bool) -> Result<Vec<Document>> {
    let content = read_text(path)?;

    if !is_csv(path) {
        return Ok(vec![Document::new(name, content, TYPE_TEXT)]);
    }

    if !csv_rows {
        return Ok(vec![Document::new(name, content, TYPE_CSV)]);
    }

    csv_records_to_documents(name, &content)
        .with_context(|| format!("Failed to parse CSV {}", path.display()))
}

/// Read a file as text: lossy UTF-8, leading byte-order mark removed.
///
/// Spreadsheet "CSV UTF-8" exports start with a BOM, and `str::trim` does
/// not strip U+FEFF.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

/// One document per CSV record, fields joined with single spaces.
///
/// The first record is treated as a header and skipped. Blank records are
/// dropped. Names take the form `<file>#<row>` with 1-based data rows.
fn csv_records_to_documents(name: &str, content: &str) -> Result<Vec<Document>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut docs = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let text = record
            .iter()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if text.is_empty() {
            continue;
        }
        docs.push(Document::new(format!("{}#{}", name, i + 1), text, TYPE_CSV));
    }
    Ok(docs)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
