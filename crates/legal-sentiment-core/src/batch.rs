//! Batch analysis over a sequence of documents, plus per-label aggregation.
//!
//! Each document is classified independently; the output preserves input
//! order and reproduces every document id.

use chrono::Utc;
use serde::Serialize;

use crate::classify::Classifier;
use crate::models::{AnalysisRecord, Document, Sentiment};

/// Analyze every document with `classifier`, in input order.
pub fn analyze_all(classifier: &Classifier, documents: &[Document]) -> Vec<AnalysisRecord> {
    analyze_all_with(classifier, documents, |_, _| {})
}

/// Like [`analyze_all`], calling `on_progress(done, total)` after each document.
pub fn analyze_all_with<F>(
    classifier: &Classifier,
    documents: &[Document],
    mut on_progress: F,
) -> Vec<AnalysisRecord>
where
    F: FnMut(usize, usize),
{
    let total = documents.len();
    let mut records = Vec::with_capacity(total);

    for (i, doc) in documents.iter().enumerate() {
        records.push(analyze_one(classifier, doc));
        on_progress(i + 1, total);
    }

    tracing::debug!(documents = total, "batch analysis complete");
    records
}

/// Analyze documents with the built-in legal lexicon.
pub fn analyze_documents(documents: &[Document]) -> Vec<AnalysisRecord> {
    analyze_all(&Classifier::default(), documents)
}

fn analyze_one(classifier: &Classifier, doc: &Document) -> AnalysisRecord {
    let result = classifier.classify(&doc.content);
    tracing::debug!(
        id = %doc.id,
        name = %doc.name,
        sentiment = %result.sentiment,
        confidence = result.confidence,
        "analyzed document"
    );

    AnalysisRecord {
        id: doc.id.clone(),
        document_name: doc.name.clone(),
        document_type: doc.doc_type.clone(),
        result,
        processed_at: Utc::now(),
    }
}

/// Per-label counts over a set of analysis records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentTally {
    positive: usize,
    negative: usize,
    neutral: usize,
}

impl SentimentTally {
    pub fn from_records(records: &[AnalysisRecord]) -> Self {
        let mut tally = Self::default();
        for record in records {
            match record.sentiment() {
                Sentiment::Positive => tally.positive += 1,
                Sentiment::Negative => tally.negative += 1,
                Sentiment::Neutral => tally.neutral += 1,
            }
        }
        tally
    }

    /// Number of records with this label.
    pub fn count(&self, label: Sentiment) -> usize {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Rounded share of records with this label; 0 for an empty set.
    pub fn percentage(&self, label: Sentiment) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.count(label) as f64 / total as f64 * 100.0).round() as u8
    }
}
