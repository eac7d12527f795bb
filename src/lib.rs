//! # Legal Sentiment
//!
//! Rule-based sentiment analysis for legal documents: contracts, dispute
//! filings, client feedback.
//!
//! The scoring itself lives in [`legal_sentiment_core`]. This crate is the
//! application around it: TOML configuration, loading documents from disk,
//! progress reporting, a terminal report, and CSV/JSON export.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────┐   ┌──────────────┐
//! │  Documents   │──▶│ legal-sentiment-core │──▶│ Report/Export│
//! │ txt/csv/demo │   │ classify + artifacts │   │  stdout/CSV  │
//! └──────────────┘   └──────────────────────┘   └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! lsa classify "The plaintiff alleges breach of contract."
//! lsa analyze --samples
//! lsa analyze ./filings --export results.csv
//! lsa lexicon
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`connector_fs`] | Filesystem document loader |
//! | [`samples`] | Built-in demonstration documents |
//! | [`analyze`] | Command orchestration |
//! | [`progress`] | Progress reporting on stderr |
//! | [`report`] | Terminal rendering |
//! | [`export`] | CSV and JSON export |

pub mod analyze;
pub mod config;
pub mod connector_fs;
pub mod export;
pub mod progress;
pub mod report;
pub mod samples;
