//! Merchant category screening against high-risk and allow lists

use super::{RiskRule, RuleOutcome};
use crate::types::{Transaction, UserHistory};
use serde::{Deserialize, Serialize};

const HIGH_RISK_POINTS: i32 = 10;
const LOW_RISK_POINTS: i32 = -5;

/// Merchant category lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantConfig {
    /// Substring matches against these flag the category (lowercase)
    pub high_risk_categories: Vec<String>,

    /// Exact matches against these lower the score (lowercase)
    pub low_risk_categories: Vec<String>,
}

impl Default for MerchantConfig {
    fn default() -> Self {
        Self {
            high_risk_categories: vec![
                "gambling".to_string(),
                "cryptocurrency".to_string(),
                "adult".to_string(),
                "cash advance".to_string(),
            ],
            low_risk_categories: vec![
                "retail".to_string(),
                "groceries".to_string(),
                "restaurant".to_string(),
                "utilities".to_string(),
            ],
        }
    }
}

/// Screens the merchant category; the only rule with a signed contribution,
/// since an allow-listed category lowers the total
pub struct MerchantRule {
    config: MerchantConfig,
}

impl MerchantRule {
    /// Create the rule with the given category lists
    pub fn new(config: MerchantConfig) -> Self {
        Self { config }
    }
}

impl RiskRule for MerchantRule {
    fn name(&self) -> &'static str {
        "merchant"
    }

    fn evaluate(&self, tx: &Transaction, _history: &UserHistory) -> RuleOutcome {
        let category = tx.merchant_category.to_lowercase();
        let mut outcome = RuleOutcome::clean();

        if self
            .config
            .high_risk_categories
            .iter()
            .any(|risky| category.contains(risky))
        {
            outcome.record(
                HIGH_RISK_POINTS,
                format!("High-risk merchant category: {}", tx.merchant_category),
            );
        }

        if self.config.low_risk_categories.iter().any(|safe| safe == &category) {
            outcome.record(
                LOW_RISK_POINTS,
                format!("Known low-risk merchant category: {}", tx.merchant_category),
            );
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::transaction;

    fn outcome(category: &str) -> RuleOutcome {
        let mut tx = transaction();
        tx.merchant_category = category.to_string();
        MerchantRule::new(MerchantConfig::default()).evaluate(&tx, &UserHistory::default())
    }

    #[test]
    fn test_high_risk_substring_match() {
        assert_eq!(outcome("Online Gambling").points, 10);
        assert_eq!(outcome("cryptocurrency exchange").points, 10);
    }

    #[test]
    fn test_allow_list_lowers_score() {
        let out = outcome("groceries");
        assert_eq!(out.points, -5);
        assert!(out.factors[0].contains("low-risk"));
    }

    #[test]
    fn test_allow_list_requires_exact_match() {
        assert_eq!(outcome("groceries and more").points, 0);
    }

    #[test]
    fn test_unlisted_category_is_neutral() {
        let out = outcome("books");
        assert_eq!(out.points, 0);
        assert!(out.factors.is_empty());
    }
}
