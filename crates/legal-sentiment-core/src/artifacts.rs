//! Key phrases and canned summaries derived from a classification.

use crate::models::Sentiment;

/// Maximum number of key phrases per document.
pub const MAX_KEY_PHRASES: usize = 3;

/// Characters kept from each sentence before the ellipsis.
pub const KEY_PHRASE_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

const POSITIVE_SUMMARY: &str = "Document reflects favorable terms, satisfaction, and positive outcomes with constructive language throughout.";
const NEGATIVE_SUMMARY: &str = "Document contains concerning elements including disputes, issues, or problematic situations requiring attention.";
const NEUTRAL_SUMMARY: &str =
    "Document presents balanced information with standard legal language and neutral tone.";

/// Excerpts of the first three non-empty sentences.
///
/// Sentences end at any run of `.`, `!` or `?`. Each excerpt is trimmed,
/// cut to its first [`KEY_PHRASE_CHARS`] characters and always suffixed
/// with `"..."`, even when nothing was cut.
pub fn key_phrases(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_KEY_PHRASES)
        .map(|s| {
            let mut phrase: String = s.chars().take(KEY_PHRASE_CHARS).collect();
            phrase.push_str(ELLIPSIS);
            phrase
        })
        .collect()
}

/// The canned summary sentence for a label.
pub fn summary(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => POSITIVE_SUMMARY,
        Sentiment::Negative => NEGATIVE_SUMMARY,
        Sentiment::Neutral => NEUTRAL_SUMMARY,
    }
}

/// Summary lookup by label name. Unknown labels get the neutral summary.
pub fn summary_for_label(label: &str) -> &'static str {
    match label.parse::<Sentiment>() {
        Ok(sentiment) => summary(sentiment),
        Err(_) => {
            tracing::warn!(label, "unknown sentiment label, using neutral summary");
            NEUTRAL_SUMMARY
        }
    }
}
