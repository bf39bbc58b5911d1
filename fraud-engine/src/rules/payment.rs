//! Payment method risk pairing

use super::{RiskRule, RuleOutcome};
use crate::types::{PaymentMethod, Transaction, UserHistory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment method rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Wallet amounts above this are flagged
    pub wallet_high_value: Decimal,

    /// Net banking amounts below this are flagged
    pub net_banking_micro: Decimal,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            wallet_high_value: Decimal::from(5000),
            net_banking_micro: Decimal::from(100),
        }
    }
}

/// Flags method/amount pairings that historically correlate with abuse:
/// large wallet spends and tiny net banking probes
pub struct PaymentMethodRule {
    config: PaymentConfig,
}

impl PaymentMethodRule {
    /// Create the rule with the given thresholds
    pub fn new(config: PaymentConfig) -> Self {
        Self { config }
    }
}

impl RiskRule for PaymentMethodRule {
    fn name(&self) -> &'static str {
        "payment_method"
    }

    fn evaluate(&self, tx: &Transaction, _history: &UserHistory) -> RuleOutcome {
        match tx.payment_method {
            PaymentMethod::Wallet if tx.amount > self.config.wallet_high_value => {
                RuleOutcome::flag(5, "High-value wallet transaction")
            }
            PaymentMethod::NetBanking if tx.amount < self.config.net_banking_micro => {
                RuleOutcome::flag(3, "Unusually small net banking transaction")
            }
            _ => RuleOutcome::clean(),
        }
    }
}
