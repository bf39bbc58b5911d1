//! Engine configuration
//!
//! All thresholds, multipliers and category lists live in an immutable
//! [`EngineConfig`] handed to the scorer at construction time. Nothing here
//! is global or mutable.

use crate::rules::{
    AmountConfig, FrequencyConfig, MerchantConfig, PaymentConfig, TimeOfDayConfig,
};
use crate::types::{FraudStatus, RiskScore};
use serde::{Deserialize, Serialize};

/// Score thresholds that partition [0,100] into the three action tiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DecisionThresholds {
    /// Score at or above this is Fraudulent / blocked
    pub block: u8,

    /// Score at or above this (but below `block`) is Suspicious / reviewed
    pub review: u8,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            block: 70,
            review: 40,
        }
    }
}

impl DecisionThresholds {
    /// Classify a final score into its fraud status tier
    pub fn status_for(&self, score: RiskScore) -> FraudStatus {
        if score.value() >= self.block {
            FraudStatus::Fraudulent
        } else if score.value() >= self.review {
            FraudStatus::Suspicious
        } else {
            FraudStatus::Legitimate
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Amount-vs-average rule settings
    pub amount: AmountConfig,

    /// 24h frequency rule settings
    pub frequency: FrequencyConfig,

    /// Payment method rule settings
    pub payment: PaymentConfig,

    /// Merchant category lists
    pub merchant: MerchantConfig,

    /// Off-peak hour window
    pub time_of_day: TimeOfDayConfig,

    /// Action thresholds
    pub thresholds: DecisionThresholds,
}
