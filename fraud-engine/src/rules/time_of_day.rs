//! Off-peak transaction time analysis

use super::{RiskRule, RuleOutcome};
use crate::types::{Transaction, UserHistory};
use chrono::Timelike;
use serde::{Deserialize, Serialize};

const OFF_PEAK_POINTS: i32 = 5;

/// Off-peak window configuration (inclusive UTC hours)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeOfDayConfig {
    /// First off-peak hour
    pub off_peak_start: u32,

    /// Last off-peak hour
    pub off_peak_end: u32,
}

impl Default for TimeOfDayConfig {
    fn default() -> Self {
        Self {
            off_peak_start: 2,
            off_peak_end: 5,
        }
    }
}

/// Flags transactions placed in the small hours
pub struct TimeOfDayRule {
    config: TimeOfDayConfig,
}

impl TimeOfDayRule {
    /// Create the rule with the given window
    pub fn new(config: TimeOfDayConfig) -> Self {
        Self { config }
    }
}

impl RiskRule for TimeOfDayRule {
    fn name(&self) -> &'static str {
        "time_of_day"
    }

    fn evaluate(&self, tx: &Transaction, _history: &UserHistory) -> RuleOutcome {
        let hour = tx.timestamp.hour();
        if (self.config.off_peak_start..=self.config.off_peak_end).contains(&hour) {
            RuleOutcome::flag(
                OFF_PEAK_POINTS,
                format!("Unusual transaction time: {:02}:00 UTC (off-peak hours)", hour),
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
    use chrono::{TimeZone, Utc};

    fn points(hour: u32) -> i32 {
        let mut tx = transaction();
        tx.timestamp = Utc.with_ymd_and_hms(2024, 3, 14, hour, 15, 0).unwrap();
        TimeOfDayRule::new(TimeOfDayConfig::default())
            .evaluate(&tx, &UserHistory::default())
            .points
    }

    #[test]
    fn test_off_peak_window_boundaries() {
        assert_eq!(points(1), 0);
        assert_eq!(points(2), 5);
        assert_eq!(points(4), 5);
        assert_eq!(points(5), 5);
        assert_eq!(points(6), 0);
        assert_eq!(points(14), 0);
    }
}
