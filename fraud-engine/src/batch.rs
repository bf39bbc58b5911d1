//! Batch transaction processing
//!
//! Repeated independent invocation of the scorer over an ordered sequence
//! of raw records. Output order matches input order; records that fail
//! validation are reported in the rejected list, never silently dropped.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::scoring::FraudScorer;
use crate::types::{Assessment, FraudStatus};
use crate::validate::TransactionRecord;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Processes raw transaction records through validation and scoring
pub struct TransactionProcessor {
    scorer: FraudScorer,
}

impl TransactionProcessor {
    /// Create a processor with the given engine configuration
    pub fn new(config: EngineConfig) -> Self {
        Self {
            scorer: FraudScorer::new(config),
        }
    }

    /// Validate and score a single record
    pub fn process(&self, record: TransactionRecord) -> Result<Assessment> {
        let (transaction, history) = record.validate()?;
        Ok(self.scorer.analyze(&transaction, &history))
    }

    /// Validate and score an ordered batch. Each record is evaluated
    /// independently; a validation failure is recorded against its input
    /// index and the batch continues.
    pub fn process_batch(&self, records: Vec<TransactionRecord>) -> BatchReport {
        let mut results = Vec::with_capacity(records.len());
        let mut rejected = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            let transaction_id = record.transaction_id.clone();
            match self.process(record) {
                Ok(assessment) => results.push(assessment),
                Err(error) => {
                    warn!("Rejected batch record {}: {}", index, error);
                    rejected.push(RejectedRecord {
                        index,
                        transaction_id,
                        error: error.to_string(),
                    });
                }
            }
        }

        let summary = BatchSummary::from_results(&results);

        BatchReport {
            results,
            rejected,
            summary,
        }
    }
}

impl Default for TransactionProcessor {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// A record excluded from a batch by validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectedRecord {
    /// Position of the record in the input sequence
    pub index: usize,

    /// Transaction ID, when the record carried one
    pub transaction_id: Option<String>,

    /// Validation failure message
    pub error: String,
}

/// Aggregate counts over a batch's scored results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of scored results
    pub total: usize,

    /// Results tiered Fraudulent
    pub fraudulent: usize,

    /// Results tiered Suspicious
    pub suspicious: usize,

    /// Results tiered Legitimate
    pub legitimate: usize,

    /// Mean risk score across scored results (0 when the batch is empty)
    pub average_risk_score: f64,
}

impl BatchSummary {
    fn from_results(results: &[Assessment]) -> Self {
        let count_status = |status: FraudStatus| {
            results
                .iter()
                .filter(|result| result.fraud_status == status)
                .count()
        };

        let average_risk_score = if results.is_empty() {
            0.0
        } else {
            let sum: u32 = results
                .iter()
                .map(|result| u32::from(result.risk_score.value()))
                .sum();
            f64::from(sum) / results.len() as f64
        };

        Self {
            total: results.len(),
            fraudulent: count_status(FraudStatus::Fraudulent),
            suspicious: count_status(FraudStatus::Suspicious),
            legitimate: count_status(FraudStatus::Legitimate),
            average_risk_score,
        }
    }
}

/// Result of processing a batch: scored results in input order, rejected
/// records with their input indices, and aggregate counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Assessments for the records that passed validation, in input order
    pub results: Vec<Assessment>,

    /// Records excluded by validation
    pub rejected: Vec<RejectedRecord>,

    /// Aggregate counts
    #[serde(flatten)]
    pub summary: BatchSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, amount: f64) -> TransactionRecord {
        serde_json::from_str(&format!(
            r#"{{"transaction_id": "{}", "user_id": "USR-7", "amount": {},
                "transaction_time": "2024-06-01T14:00:00Z", "payment_method": "Card",
                "avg_user_transaction_amount": 100}}"#,
            id, amount
        ))
        .unwrap()
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let processor = TransactionProcessor::default();
        let report =
            processor.process_batch(vec![record("A", 100.0), record("B", 100.0), record("C", 100.0)]);

        let ids: Vec<&str> = report
            .results
            .iter()
            .map(|result| result.transaction_id.as_str())
            .collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_invalid_record_is_reported_not_dropped() {
        let processor = TransactionProcessor::default();

        let mut bad = record("BAD", 100.0);
        bad.payment_method = Some("carrier pigeon".to_string());

        let report = processor.process_batch(vec![record("A", 100.0), bad, record("C", 100.0)]);

        assert_eq!(report.results.len(), 2);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].index, 1);
        assert_eq!(report.rejected[0].transaction_id.as_deref(), Some("BAD"));
        assert!(report.rejected[0].error.contains("payment_method"));
    }

    #[test]
    fn test_summary_counts() {
        let processor = TransactionProcessor::default();

        // 100 == avg -> Legitimate; 50_000 with a gambling category and a
        // burst of activity -> pushes into higher tiers
        let mut hot = record("HOT", 50_000.0);
        hot.merchant_category = Some("gambling".to_string());
        hot.transaction_frequency_24h = Some(12);
        hot.user_location = Some("Austin, USA".to_string());
        hot.merchant_location = Some("Macau, China".to_string());

        let report = processor.process_batch(vec![record("OK", 100.0), hot]);

        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.legitimate, 1);
        assert_eq!(report.summary.fraudulent, 1);
        assert!(report.summary.average_risk_score > 0.0);
    }

    #[test]
    fn test_empty_batch() {
        let report = TransactionProcessor::default().process_batch(Vec::new());
        assert_eq!(report.summary.total, 0);
        assert_eq!(report.summary.average_risk_score, 0.0);
    }
}
