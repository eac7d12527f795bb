//! Lexicon classifier.
//!
//! # Algorithm
//!
//! 1. Lowercase the text and split it on runs of whitespace. Punctuation
//!    stays attached to tokens.
//! 2. For each token, walk the lexicon buckets in priority order
//!    (positive, negative, neutral). The first bucket with an entry
//!    contained in the token receives the hit; later buckets are skipped.
//! 3. Convert hit counts to percentages of all hits. Tokens without a hit
//!    do not count toward the total.
//! 4. Apply the decision rule on the unrounded percentages:
//!    - positive strictly dominates: `Positive`, `min(85 + (p - n) / 2, 95)`
//!    - negative strictly dominates: `Negative`, `min(85 + (n - p) / 2, 95)`
//!    - otherwise: `Neutral`, `max(65, 80 - |p - n| * 0.3)`
//! 5. Round confidence and percentages to the nearest integer.
//!
//! Text with no lexicon hits yields `Neutral` with confidence 80 and
//! scores `0/0/0`.

use serde::Serialize;

use crate::artifacts;
use crate::lexicon::Lexicon;
use crate::models::{ScoreBreakdown, Sentiment, SentimentResult, SentimentScores};

const DOMINANT_BASE: f64 = 85.0;
const DOMINANT_MARGIN_WEIGHT: f64 = 0.5;
const DOMINANT_CAP: f64 = 95.0;
const NEUTRAL_BASE: f64 = 80.0;
const NEUTRAL_MARGIN_WEIGHT: f64 = 0.3;
const NEUTRAL_FLOOR: f64 = 65.0;

/// Unrounded bucket shares used by the decision rule.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Percentages {
    positive: f64,
    negative: f64,
    neutral: f64,
}

impl Percentages {
    fn from_breakdown(counts: &ScoreBreakdown) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self::default();
        }
        let share = |n: u32| n as f64 / total as f64 * 100.0;
        Self {
            positive: share(counts.positive),
            negative: share(counts.negative),
            neutral: share(counts.neutral),
        }
    }

    fn rounded(&self) -> SentimentScores {
        SentimentScores {
            positive: round_pct(self.positive),
            negative: round_pct(self.negative),
            neutral: round_pct(self.neutral),
        }
    }
}

impl SentimentScores {
    /// Rounded percentages for a set of raw hit counts.
    pub fn from_breakdown(counts: &ScoreBreakdown) -> Self {
        Percentages::from_breakdown(counts).rounded()
    }
}

/// Label, confidence, and scores before key phrases and summary are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub sentiment: Sentiment,
    pub confidence: u8,
    pub scores: SentimentScores,
    pub counts: ScoreBreakdown,
}

/// Rule-based classifier over an injected [`Lexicon`].
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    lexicon: Lexicon,
}

impl Classifier {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Count lexicon hits per bucket, first matching bucket wins per token.
    pub fn count(&self, text: &str) -> ScoreBreakdown {
        let lowered = text.to_lowercase();
        let buckets = self.lexicon.buckets();
        let mut counts = ScoreBreakdown::default();

        for token in lowered.split_whitespace() {
            let hit = buckets
                .iter()
                .find(|(_, words)| words.iter().any(|w| token.contains(w.as_str())))
                .map(|(bucket, _)| *bucket);
            if let Some(bucket) = hit {
                counts.increment(bucket);
            }
        }

        counts
    }

    /// Count, normalize, and apply the decision rule.
    pub fn verdict(&self, text: &str) -> Verdict {
        let counts = self.count(text);
        let pct = Percentages::from_breakdown(&counts);
        let (sentiment, confidence) = decide(&pct);

        Verdict {
            sentiment,
            confidence,
            scores: pct.rounded(),
            counts,
        }
    }

    /// Classify `text` and derive its key phrases and summary.
    pub fn classify(&self, text: &str) -> SentimentResult {
        let verdict = self.verdict(text);
        tracing::trace!(
            sentiment = %verdict.sentiment,
            confidence = verdict.confidence,
            hits = verdict.counts.total(),
            "classified text"
        );

        SentimentResult {
            sentiment: verdict.sentiment,
            confidence: verdict.confidence,
            scores: verdict.scores,
            key_phrases: artifacts::key_phrases(text),
            summary: artifacts::summary(verdict.sentiment).to_string(),
        }
    }
}

/// Classify a document's content with the built-in legal lexicon.
pub fn classify_document(content: &str) -> SentimentResult {
    Classifier::default().classify(content)
}

fn decide(pct: &Percentages) -> (Sentiment, u8) {
    let (p, n, u) = (pct.positive, pct.negative, pct.neutral);

    if p > n && p > u {
        let c = (DOMINANT_BASE + (p - n) * DOMINANT_MARGIN_WEIGHT).min(DOMINANT_CAP);
        (Sentiment::Positive, c.round() as u8)
    } else if n > p && n > u {
        let c = (DOMINANT_BASE + (n - p) * DOMINANT_MARGIN_WEIGHT).min(DOMINANT_CAP);
        (Sentiment::Negative, c.round() as u8)
    } else {
        let c = (NEUTRAL_BASE - (p - n).abs() * NEUTRAL_MARGIN_WEIGHT).max(NEUTRAL_FLOOR);
        (Sentiment::Neutral, c.round() as u8)
    }
}

fn round_pct(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
