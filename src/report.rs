//! Terminal rendering of analysis results.
//!
//! `lsa analyze` prints a summary card per sentiment label followed by the
//! per-document detail. Everything here writes to stdout.

use chrono::{DateTime, Utc};

use legal_sentiment_core::{
    AnalysisRecord, Lexicon, Sentiment, SentimentResult, SentimentScores, SentimentTally,
};

const BAR_WIDTH: usize = 20;

/// Summary cards: count and share of records per label.
pub fn render_summary(records: &[AnalysisRecord]) -> String {
    let tally = SentimentTally::from_records(records);
    let mut out = String::new();

    out.push_str("Legal Sentiment — Analysis Summary\n");
    out.push_str("==================================\n\n");
    out.push_str(&format!("  Documents:   {}\n\n", tally.total()));
    out.push_str(&format!("  {:<10} {:>6} {:>8}\n", "SENTIMENT", "COUNT", "SHARE"));
    out.push_str(&format!("  {}\n", "-".repeat(26)));
    for label in Sentiment::ALL {
        out.push_str(&format!(
            "  {:<10} {:>6} {:>7}%\n",
            label.as_str(),
            tally.count(label),
            tally.percentage(label)
        ));
    }
    out
}

/// Detail block for one record.
pub fn render_record(record: &AnalysisRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("--- {} ({}) ---\n", record.document_name, record.document_type));
    out.push_str(&format!("id:           {}\n", record.id));
    out.push_str(&render_result(&record.result));
    out.push_str(&format!("processed_at: {}\n", format_ts(&record.processed_at)));
    out
}

/// Sentiment, confidence, score bars, key phrases, and summary.
pub fn render_result(result: &SentimentResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("sentiment:    {}\n", result.sentiment));
    out.push_str(&format!("confidence:   {}%\n", result.confidence));
    out.push_str(&render_scores(&result.scores));
    if !result.key_phrases.is_empty() {
        out.push_str("key phrases:\n");
        for phrase in &result.key_phrases {
            out.push_str(&format!("  - {}\n", phrase));
        }
    }
    out.push_str(&format!("summary:      {}\n", result.summary));
    out
}

fn render_scores(scores: &SentimentScores) -> String {
    let mut out = String::new();
    for label in Sentiment::ALL {
        let pct = scores.get(label);
        out.push_str(&format!(
            "  {:<9} {:>3}% {}\n",
            label.as_str().to_lowercase(),
            pct,
            bar(pct)
        ));
    }
    out
}

fn bar(pct: u8) -> String {
    let filled = (pct as usize * BAR_WIDTH + 50) / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Lexicon listing in matching priority order.
pub fn render_lexicon(lexicon: &Lexicon) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<10} {:>5}  WORDS\n", "BUCKET", "COUNT"));
    for (i, (bucket, words)) in lexicon.buckets().iter().enumerate() {
        out.push_str(&format!(
            "{}. {:<7} {:>5}  {}\n",
            i + 1,
            bucket.as_str().to_lowercase(),
            words.len(),
            words.join(", ")
        ));
    }
    out
}

pub fn print_report(records: &[AnalysisRecord]) {
    if records.is_empty() {
        println!("No analysis results.");
        return;
    }
    println!("{}", render_summary(records));
    for record in records {
        println!("{}", render_record(record));
    }
}

fn format_ts(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use legal_sentiment_core::{analyze_documents, classify_document, Document};

    #[test]
    fn test_summary_cards() {
        let records = analyze_documents(&[
            Document::with_id("1", "a.txt", "pleased", "Text"),
            Document::with_id("2", "b.txt", "breach", "Text"),
            Document::with_id("3", "c.txt", "pleased again", "Text"),
        ]);
        let out = render_summary(&records);
        assert!(out.contains("Documents:   3"));
        assert!(out.contains("  Positive        2      67%"));
        assert!(out.contains("  Negative        1      33%"));
        assert!(out.contains("  Neutral         0       0%"));
    }

    #[test]
    fn test_result_block() {
        let out = render_result(&classify_document("Favorable terms. The court finds."));
        assert!(out.contains("sentiment:    Neutral"));
        assert!(out.contains("confidence:   70%"));
        assert!(out.contains("  - Favorable terms..."));
        assert!(out.contains("  - The court finds..."));
        assert!(out.contains("  positive   33% #######............."));
    }

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0), ".".repeat(BAR_WIDTH));
        assert_eq!(bar(100), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(50).matches('#').count(), 10);
    }

    #[test]
    fn test_lexicon_listing_order() {
        let out = render_lexicon(&Lexicon::legal());
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("1. positive"));
        assert!(lines[2].starts_with("2. negative"));
        assert!(lines[3].starts_with("3. neutral"));
        assert!(lines[3].contains("court"));
    }
}
