//! Amount analysis against the user's average transaction baseline

use super::{RiskRule, RuleOutcome};
use crate::types::{Transaction, UserHistory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amount rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountConfig {
    /// Ratio to the user average at or above which the full spike fires
    pub high_multiplier: Decimal,

    /// Ratio at or above which the partial contribution fires
    pub medium_multiplier: Decimal,

    /// Ratio below which an amount looks like a card-testing probe
    pub micro_ratio: Decimal,

    /// Amount above which a first transaction (no baseline) is flagged
    pub first_transaction_threshold: Decimal,
}

impl Default for AmountConfig {
    fn default() -> Self {
        Self {
            high_multiplier: Decimal::from(3),
            medium_multiplier: Decimal::from(2),
            micro_ratio: Decimal::new(1, 1), // 0.1
            first_transaction_threshold: Decimal::from(1000),
        }
    }
}

/// Flags amounts far above (or suspiciously far below) the user's baseline
pub struct AmountRule {
    config: AmountConfig,
}

impl AmountRule {
    /// Create the rule with the given thresholds
    pub fn new(config: AmountConfig) -> Self {
        Self { config }
    }
}

impl RiskRule for AmountRule {
    fn name(&self) -> &'static str {
        "amount"
    }

    fn evaluate(&self, tx: &Transaction, _history: &UserHistory) -> RuleOutcome {
        if tx.avg_amount > Decimal::ZERO {
            let Some(ratio) = tx.amount.checked_div(tx.avg_amount) else {
                // Division overflow: the amount dwarfs the baseline
                return RuleOutcome::flag(
                    25,
                    format!(
                        "Amount spike: amount vastly exceeds user average ({} {} vs {} baseline)",
                        tx.amount.round_dp(2),
                        tx.currency,
                        tx.avg_amount.round_dp(2)
                    ),
                );
            };

            if ratio >= self.config.high_multiplier {
                RuleOutcome::flag(
                    25,
                    format!(
                        "Amount spike: {}x user average ({} {} vs {} baseline)",
                        ratio.round_dp(2),
                        tx.amount.round_dp(2),
                        tx.currency,
                        tx.avg_amount.round_dp(2)
                    ),
                )
            } else if ratio >= self.config.medium_multiplier {
                RuleOutcome::flag(
                    15,
                    format!("Above-average amount: {}x user average", ratio.round_dp(2)),
                )
            } else if ratio < self.config.micro_ratio {
                RuleOutcome::flag(
                    5,
                    format!(
                        "Unusually small amount: {}x user average (possible test transaction)",
                        ratio.round_dp(2)
                    ),
                )
            } else {
                RuleOutcome::clean()
            }
        } else if tx.amount > self.config.first_transaction_threshold {
            RuleOutcome::flag(10, "High-value first transaction without user history")
        } else {
            RuleOutcome::clean()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::transaction;
    use rust_decimal_macros::dec;

    fn outcome(amount: Decimal, avg: Decimal) -> RuleOutcome {
        let mut tx = transaction();
        tx.amount = amount;
        tx.avg_amount = avg;
        AmountRule::new(AmountConfig::default()).evaluate(&tx, &UserHistory::default())
    }

    #[test]
    fn test_spike_at_high_multiplier() {
        let out = outcome(dec!(5000), dec!(150));
        assert_eq!(out.points, 25);
        assert!(out.factors[0].starts_with("Amount spike: 33.33x"));
    }

    #[test]
    fn test_partial_at_medium_multiplier() {
        let out = outcome(dec!(250), dec!(100));
        assert_eq!(out.points, 15);
    }

    #[test]
    fn test_micro_amount_probe() {
        let out = outcome(dec!(5), dec!(100));
        assert_eq!(out.points, 5);
        assert!(out.factors[0].contains("test transaction"));
    }

    #[test]
    fn test_amount_equal_to_average_is_clean() {
        let out = outcome(dec!(100), dec!(100));
        assert_eq!(out.points, 0);
        assert!(out.factors.is_empty());
    }

    #[test]
    fn test_first_transaction_without_baseline() {
        assert_eq!(outcome(dec!(5000), Decimal::ZERO).points, 10);
        assert_eq!(outcome(dec!(500), Decimal::ZERO).points, 0);
    }
}
