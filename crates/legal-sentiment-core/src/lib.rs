//! # Legal Sentiment Core
//!
//! Deterministic, rule-based sentiment scoring for short legal documents:
//! lexicons, the lexicon classifier, key phrase and summary generation, and
//! the batch runner.
//!
//! This crate performs no filesystem I/O and holds no global state. The
//! calling application reads documents, hands their text to
//! [`classify_document`] or [`analyze_documents`], and renders the results.
//!
//! # Example
//!
//! ```rust
//! use legal_sentiment_core::{classify_document, Sentiment};
//!
//! let result = classify_document("The plaintiff alleges breach and demands urgent dismissal.");
//! assert_eq!(result.sentiment, Sentiment::Negative);
//! assert_eq!(result.confidence, 95);
//! ```

pub mod artifacts;
pub mod batch;
pub mod classify;
pub mod lexicon;
pub mod models;

pub use batch::{analyze_all, analyze_all_with, analyze_documents, SentimentTally};
pub use classify::{classify_document, Classifier, Verdict};
pub use lexicon::Lexicon;
pub use models::{
    AnalysisRecord, Document, ScoreBreakdown, Sentiment, SentimentResult, SentimentScores,
};
