//! Data types shared by the classifier, the batch runner, and callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Sentiment label assigned to a document.
///
/// The declaration order is also the matching priority of the buckets:
/// a token that hits several lexicons is counted in the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// All labels in priority order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => anyhow::bail!("unknown sentiment label: '{}'", other),
        }
    }
}

/// A document handed to the core for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque identifier, unique within a batch.
    pub id: String,
    /// Display name, usually the file name.
    pub name: String,
    /// Raw text.
    pub content: String,
    /// Free-form type label (`"Contract"`, `"CSV"`, `"Text"`, ...).
    #[serde(rename = "type")]
    pub doc_type: String,
}

impl Document {
    /// Create a document with a freshly generated UUID.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        doc_type: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, content, doc_type)
    }

    /// Create a document with a caller-assigned id.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        doc_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
            doc_type: doc_type.into(),
        }
    }
}

/// Raw lexicon hit counts for one document, before normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl ScoreBreakdown {
    /// Number of tokens that hit any lexicon.
    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }

    pub(crate) fn increment(&mut self, bucket: Sentiment) {
        match bucket {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

/// Bucket shares as rounded percentages.
///
/// Each value is rounded independently, so the sum may drift from 100 by
/// the rounding error. All three are 0 when no token matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub positive: u8,
    pub negative: u8,
    pub neutral: u8,
}

impl SentimentScores {
    pub fn get(&self, bucket: Sentiment) -> u8 {
        match bucket {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn sum(&self) -> u32 {
        self.positive as u32 + self.negative as u32 + self.neutral as u32
    }
}

/// Outcome of classifying one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Decision margin in `[65, 95]`; not a probability.
    pub confidence: u8,
    pub scores: SentimentScores,
    /// Up to three sentence excerpts.
    pub key_phrases: Vec<String>,
    pub summary: String,
}

/// A [`SentimentResult`] joined with the identity of the analyzed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    pub document_name: String,
    pub document_type: String,
    #[serde(flatten)]
    pub result: SentimentResult,
    pub processed_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn sentiment(&self) -> Sentiment {
        self.result.sentiment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_parse_case_insensitive() {
        assert_eq!("Positive".parse::<Sentiment>().unwrap(), Sentiment::Positive);
        assert_eq!("negative".parse::<Sentiment>().unwrap(), Sentiment::Negative);
        assert_eq!(" NEUTRAL ".parse::<Sentiment>().unwrap(), Sentiment::Neutral);
        assert!("Mixed".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_document_new_generates_unique_ids() {
        let a = Document::new("a.txt", "alpha", "Text");
        let b = Document::new("a.txt", "alpha", "Text");
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = SentimentResult {
            sentiment: Sentiment::Neutral,
            confidence: 80,
            scores: SentimentScores::default(),
            key_phrases: vec!["Hello...".to_string()],
            summary: "s".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sentiment"], "Neutral");
        assert_eq!(json["keyPhrases"][0], "Hello...");
        assert_eq!(json["scores"]["neutral"], 0);
    }

    #[test]
    fn test_breakdown_total() {
        let b = ScoreBreakdown {
            positive: 2,
            negative: 1,
            neutral: 4,
        };
        assert_eq!(b.total(), 7);
    }
}
