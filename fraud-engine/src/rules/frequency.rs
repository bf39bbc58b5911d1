//! Transaction frequency analysis over the caller-supplied 24h count

use super::{RiskRule, RuleOutcome};
use crate::types::{Transaction, UserHistory};
use serde::{Deserialize, Serialize};

/// Frequency rule configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrequencyConfig {
    /// Count at or above which the full contribution fires
    pub high_threshold: u32,

    /// Count at or above which the partial contribution fires
    pub medium_threshold: u32,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            high_threshold: 10,
            medium_threshold: 5,
        }
    }
}

/// Flags bursts of transactions within a 24 hour window
pub struct FrequencyRule {
    config: FrequencyConfig,
}

impl FrequencyRule {
    /// Create the rule with the given thresholds
    pub fn new(config: FrequencyConfig) -> Self {
        Self { config }
    }
}

impl RiskRule for FrequencyRule {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn evaluate(&self, tx: &Transaction, _history: &UserHistory) -> RuleOutcome {
        if tx.frequency_24h >= self.config.high_threshold {
            RuleOutcome::flag(
                20,
                format!(
                    "Abnormal frequency: {} transactions in last 24 hours",
                    tx.frequency_24h
                ),
            )
        } else if tx.frequency_24h >= self.config.medium_threshold {
            RuleOutcome::flag(
                10,
                format!(
                    "Elevated frequency: {} transactions in last 24 hours",
                    tx.frequency_24h
                ),
            )
        } else {
            RuleOutcome::clean()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::transaction;

    fn points(frequency: u32) -> i32 {
        let mut tx = transaction();
        tx.frequency_24h = frequency;
        FrequencyRule::new(FrequencyConfig::default())
            .evaluate(&tx, &UserHistory::default())
            .points
    }

    #[test]
    fn test_frequency_ladder() {
        assert_eq!(points(0), 0);
        assert_eq!(points(4), 0);
        assert_eq!(points(5), 10);
        assert_eq!(points(9), 10);
        assert_eq!(points(10), 20);
        assert_eq!(points(500), 20);
    }

    #[test]
    fn test_frequency_sub_score_is_monotone() {
        let mut previous = 0;
        for frequency in 0..30 {
            let current = points(frequency);
            assert!(current >= previous, "dropped at frequency {}", frequency);
            previous = current;
        }
    }
}
