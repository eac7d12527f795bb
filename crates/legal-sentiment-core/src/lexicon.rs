//! Sentiment lexicons.
//!
//! A [`Lexicon`] holds three ordered lists of lowercase substrings, one per
//! [`Sentiment`] bucket. Entries are matched by containment, not equality:
//! the token `"breached,"` hits the entry `"breach"`.
//!
//! Lexicons are plain immutable values. The classifier receives one at
//! construction, so callers and tests can supply their own word lists.

use anyhow::{bail, Result};
use serde::Serialize;

use crate::models::Sentiment;

const LEGAL_POSITIVE: &[&str] = &[
    "favorable",
    "successful",
    "satisfaction",
    "pleased",
    "exceptional",
    "outstanding",
    "invaluable",
    "confidence",
    "recommend",
    "flexibility",
];

const LEGAL_NEGATIVE: &[&str] = &[
    "breach",
    "dispute",
    "dismissal",
    "concern",
    "losses",
    "urgent",
    "deterioration",
    "alleges",
    "demands",
    "delays",
];

const LEGAL_NEUTRAL: &[&str] = &[
    "agreement",
    "establishes",
    "acknowledges",
    "revised",
    "documented",
    "argues",
    "court",
    "finds",
];

/// Three word lists keyed by sentiment bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
    neutral: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::legal()
    }
}

impl Lexicon {
    /// Build a lexicon from caller-supplied lists.
    ///
    /// Entries are trimmed and lowercased. Empty entries are rejected, since
    /// the empty substring would match every token, and so are entries with
    /// inner whitespace, which no whitespace-split token can contain.
    pub fn new<S: AsRef<str>>(positive: &[S], negative: &[S], neutral: &[S]) -> Result<Self> {
        Ok(Self {
            positive: normalize_entries(Sentiment::Positive, positive)?,
            negative: normalize_entries(Sentiment::Negative, negative)?,
            neutral: normalize_entries(Sentiment::Neutral, neutral)?,
        })
    }

    /// The built-in word lists for legal correspondence.
    pub fn legal() -> Self {
        Self {
            positive: owned(LEGAL_POSITIVE),
            negative: owned(LEGAL_NEGATIVE),
            neutral: owned(LEGAL_NEUTRAL),
        }
    }

    /// Words of one bucket.
    pub fn words(&self, bucket: Sentiment) -> &[String] {
        match bucket {
            Sentiment::Positive => &self.positive,
            Sentiment::Negative => &self.negative,
            Sentiment::Neutral => &self.neutral,
        }
    }

    /// `(bucket, words)` pairs in matching priority order:
    /// positive, then negative, then neutral.
    pub fn buckets(&self) -> [(Sentiment, &[String]); 3] {
        Sentiment::ALL.map(|bucket| (bucket, self.words(bucket)))
    }

    /// Return a copy with one bucket's list replaced.
    pub fn with_words<S: AsRef<str>>(mut self, bucket: Sentiment, words: &[S]) -> Result<Self> {
        let words = normalize_entries(bucket, words)?;
        match bucket {
            Sentiment::Positive => self.positive = words,
            Sentiment::Negative => self.negative = words,
            Sentiment::Neutral => self.neutral = words,
        }
        Ok(self)
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len() + self.neutral.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn normalize_entries<S: AsRef<str>>(bucket: Sentiment, entries: &[S]) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let word = entry.as_ref().trim().to_lowercase();
        if word.is_empty() {
            bail!(
                "{} lexicon entry {} is empty",
                bucket.as_str().to_lowercase(),
                i
            );
        }
        if word.contains(char::is_whitespace) {
            bail!(
                "{} lexicon entry {} ('{}') contains whitespace; entries match single words",
                bucket.as_str().to_lowercase(),
                i,
                word
            );
        }
        out.push(word);
    }
    Ok(out)
}
