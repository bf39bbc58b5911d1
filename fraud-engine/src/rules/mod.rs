//! Scoring rules
//!
//! Each rule is a pure function from (transaction, history) to a bounded
//! point contribution plus zero or more human-readable factor strings. The
//! scorer evaluates every rule in a fixed order and sums the contributions;
//! no rule short-circuits another, so the factor list stays complete even
//! when a single rule decides the outcome.

mod amount;
mod device;
mod frequency;
mod ip;
mod location;
mod merchant;
mod payment;
mod time_of_day;

pub use amount::{AmountConfig, AmountRule};
pub use device::DeviceRule;
pub use frequency::{FrequencyConfig, FrequencyRule};
pub use ip::IpRule;
pub use location::LocationRule;
pub use merchant::{MerchantConfig, MerchantRule};
pub use payment::{PaymentConfig, PaymentMethodRule};
pub use time_of_day::{TimeOfDayConfig, TimeOfDayRule};

use crate::types::{Transaction, UserHistory};

/// Outcome of evaluating one rule against one transaction
#[derive(Debug, Clone, Default)]
pub struct RuleOutcome {
    /// Point contribution (signed; the merchant rule can subtract)
    pub points: i32,

    /// Factor strings for each triggered condition
    pub factors: Vec<String>,
}

impl RuleOutcome {
    /// Outcome with no contribution
    pub fn clean() -> Self {
        Self::default()
    }

    /// Outcome with a single contribution and factor
    pub fn flag(points: i32, factor: impl Into<String>) -> Self {
        Self {
            points,
            factors: vec![factor.into()],
        }
    }

    /// Add a contribution with its factor string
    pub fn record(&mut self, points: i32, factor: impl Into<String>) {
        self.points += points;
        self.factors.push(factor.into());
    }

    /// Add a silent contribution (no factor string)
    pub fn add_points(&mut self, points: i32) {
        self.points += points;
    }
}

/// A single independent scoring rule
pub trait RiskRule: Send + Sync {
    /// Short rule name, used in logs
    fn name(&self) -> &'static str;

    /// Evaluate the rule. Must be pure: no I/O, no mutation, deterministic.
    fn evaluate(&self, tx: &Transaction, history: &UserHistory) -> RuleOutcome;
}
