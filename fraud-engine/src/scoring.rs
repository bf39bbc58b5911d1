//! Risk scoring engine
//!
//! Folds the fixed, ordered rule list over one transaction, sums the
//! contributions, clamps to [0,100] and derives the fraud status, the
//! recommended action and the reasoning narrative. Pure computation: no
//! I/O, no shared state, safe to call from any number of threads at once.

use crate::config::{DecisionThresholds, EngineConfig};
use crate::rules::{
    AmountRule, DeviceRule, FrequencyRule, IpRule, LocationRule, MerchantRule,
    PaymentMethodRule, RiskRule, TimeOfDayRule,
};
use crate::types::{
    Assessment, FraudStatus, RecommendedAction, RiskScore, Transaction, UserHistory,
};
use tracing::info;

/// Fraud scorer
pub struct FraudScorer {
    thresholds: DecisionThresholds,
    rules: Vec<Box<dyn RiskRule>>,
}

impl FraudScorer {
    /// Create a scorer with the given configuration. The rule order is
    /// fixed; factor strings always come out in this order.
    pub fn new(config: EngineConfig) -> Self {
        let rules: Vec<Box<dyn RiskRule>> = vec![
            Box::new(AmountRule::new(config.amount)),
            Box::new(FrequencyRule::new(config.frequency)),
            Box::new(LocationRule),
            Box::new(DeviceRule),
            Box::new(IpRule),
            Box::new(PaymentMethodRule::new(config.payment)),
            Box::new(MerchantRule::new(config.merchant)),
            Box::new(TimeOfDayRule::new(config.time_of_day)),
        ];

        Self {
            thresholds: config.thresholds,
            rules,
        }
    }

    /// Assess one transaction against its (possibly empty) history.
    ///
    /// Every rule runs regardless of the running total, so the factor list
    /// and reasoning stay complete even when one rule alone crosses a
    /// threshold.
    pub fn analyze(&self, tx: &Transaction, history: &UserHistory) -> Assessment {
        let mut total: i32 = 0;
        let mut risk_factors = Vec::new();

        for rule in &self.rules {
            let outcome = rule.evaluate(tx, history);
            total += outcome.points;
            risk_factors.extend(outcome.factors);
        }

        let risk_score = RiskScore::from_points(total);
        let fraud_status = self.thresholds.status_for(risk_score);
        let recommended_action = RecommendedAction::from(fraud_status);
        let reasoning = compose_reasoning(tx, &risk_factors, risk_score, fraud_status);

        info!(
            "Risk score {} ({}) for transaction {}",
            risk_score, fraud_status, tx.transaction_id
        );

        Assessment {
            transaction_id: tx.transaction_id.clone(),
            fraud_status,
            risk_score,
            risk_factors,
            reasoning,
            recommended_action,
        }
    }
}

impl Default for FraudScorer {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn compose_reasoning(
    tx: &Transaction,
    factors: &[String],
    score: RiskScore,
    status: FraudStatus,
) -> String {
    if factors.is_empty() {
        return format!(
            "Transaction appears legitimate. Normal transaction pattern for user {} with amount {} {} via {}.",
            tx.user_id,
            tx.amount.round_dp(2),
            tx.currency,
            tx.payment_method
        );
    }

    let mut parts = vec![format!("Risk assessment for transaction {}:", tx.transaction_id)];

    parts.push(
        match status {
            FraudStatus::Fraudulent => "HIGH RISK - Multiple suspicious indicators detected:",
            FraudStatus::Suspicious => "MEDIUM RISK - Some unusual patterns detected:",
            FraudStatus::Legitimate => "LOW RISK - Minor anomalies detected:",
        }
        .to_string(),
    );

    for (position, factor) in factors.iter().enumerate() {
        parts.push(format!("{}. {}", position + 1, factor));
    }

    parts.push(format!("\nOverall risk score: {}/100", score));

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{matching_history, transaction};
    use rust_decimal_macros::dec;

    #[test]
    fn test_clean_transaction_scores_low() {
        let scorer = FraudScorer::default();
        let assessment = scorer.analyze(&transaction(), &matching_history());

        assert_eq!(assessment.risk_score.value(), 0);
        assert_eq!(assessment.fraud_status, FraudStatus::Legitimate);
        assert_eq!(assessment.recommended_action, RecommendedAction::Allow);
        assert!(assessment.risk_factors.is_empty());
        assert!(assessment.reasoning.starts_with("Transaction appears legitimate"));
    }

    #[test]
    fn test_factors_come_out_in_rule_order() {
        let scorer = FraudScorer::default();

        let mut tx = transaction();
        tx.amount = dec!(5000);
        tx.avg_amount = dec!(150);
        tx.frequency_24h = 12;
        tx.merchant_category = "gambling".to_string();

        let assessment = scorer.analyze(&tx, &matching_history());

        assert!(assessment.risk_factors[0].starts_with("Amount spike"));
        assert!(assessment.risk_factors[1].starts_with("Abnormal frequency"));
        assert!(assessment.risk_factors[2].starts_with("High-risk merchant"));
    }

    #[test]
    fn test_reasoning_enumerates_factors() {
        let scorer = FraudScorer::default();

        let mut tx = transaction();
        tx.frequency_24h = 6;

        let assessment = scorer.analyze(&tx, &matching_history());

        assert!(assessment.reasoning.contains("Risk assessment for transaction TXN-1001:"));
        assert!(assessment.reasoning.contains("1. Elevated frequency"));
        assert!(assessment
            .reasoning
            .contains(&format!("Overall risk score: {}/100", assessment.risk_score)));
    }

    #[test]
    fn test_safe_category_cannot_push_score_below_zero() {
        let scorer = FraudScorer::default();

        let mut tx = transaction();
        tx.merchant_category = "groceries".to_string();

        let assessment = scorer.analyze(&tx, &matching_history());
        assert_eq!(assessment.risk_score.value(), 0);
        // The allow-list factor is still reported even though the clamp
        // holds the score at zero.
        assert_eq!(assessment.risk_factors.len(), 1);
    }

    #[test]
    fn test_custom_thresholds_shift_the_action() {
        let config = EngineConfig {
            thresholds: DecisionThresholds {
                block: 10,
                review: 5,
            },
            ..EngineConfig::default()
        };
        let scorer = FraudScorer::new(config);

        let mut tx = transaction();
        tx.frequency_24h = 12; // 20 points

        let assessment = scorer.analyze(&tx, &matching_history());
        assert_eq!(assessment.recommended_action, RecommendedAction::Block);
    }
}
