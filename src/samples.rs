//! Built-in demonstration documents.
//!
//! Loaded by `lsa analyze --samples` so the tool can be tried without any
//! input files.

use legal_sentiment_core::Document;

pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::with_id(
            "1",
            "Contract_Amendment_2024.txt",
            "This amendment to the software licensing agreement establishes favorable terms for both parties. \
             The client agrees to extend the contract period with mutual satisfaction. \
             Both parties acknowledge the successful completion of milestones and express confidence in continued collaboration. \
             The revised payment schedule provides adequate flexibility while maintaining contractual obligations.",
            "Contract",
        ),
        Document::with_id(
            "2",
            "Dispute_Resolution_Case.txt",
            "The plaintiff alleges breach of contract and demands immediate remediation. \
             The defendant disputes these claims and argues for dismissal due to lack of substantial evidence. \
             The court finds merit in both arguments but expresses concern about the timeline delays. \
             Significant financial losses are documented, requiring urgent attention to prevent further deterioration of the business relationship.",
            "Dispute",
        ),
        Document::with_id(
            "3",
            "Client_Feedback_Q3.txt",
            "We are extremely pleased with the legal services provided during Q3. \
             The team demonstrated exceptional professionalism and delivered outstanding results within the expected timeframe. \
             The strategic advice proved invaluable for our business decisions. \
             We highly recommend this firm and look forward to continued partnership in future endeavors.",
            "Feedback",
        ),
    ]
}
