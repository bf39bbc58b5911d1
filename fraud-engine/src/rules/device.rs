//! Device fingerprint analysis against the user's device history

use super::{RiskRule, RuleOutcome};
use crate::types::{Transaction, UserHistory};

const NEW_DEVICE_POINTS: i32 = 12;
const SWITCHING_POINTS: i32 = 4;
const NO_HISTORY_POINTS: i32 = 3;

// Switching heuristic: at least this many history entries with at least
// this many adjacent changes between them.
const SWITCH_MIN_ENTRIES: usize = 4;
const SWITCH_MIN_CHANGES: usize = 3;

/// Flags device types the user has never used, and erratic switching
/// between known devices
pub struct DeviceRule;

impl RiskRule for DeviceRule {
    fn name(&self) -> &'static str {
        "device"
    }

    fn evaluate(&self, tx: &Transaction, history: &UserHistory) -> RuleOutcome {
        if history.device_types.is_empty() {
            return RuleOutcome::flag(NO_HISTORY_POINTS, "No device history available");
        }

        if !history.device_types.iter().any(|d| d == &tx.device_type) {
            return RuleOutcome::flag(
                NEW_DEVICE_POINTS,
                format!("New device type detected: {}", tx.device_type),
            );
        }

        if history.device_types.len() >= SWITCH_MIN_ENTRIES
            && adjacent_changes(&history.device_types) >= SWITCH_MIN_CHANGES
        {
            return RuleOutcome::flag(
                SWITCHING_POINTS,
                "Frequent device switching across recent sessions",
            );
        }

        RuleOutcome::clean()
    }
}

fn adjacent_changes(devices: &[String]) -> usize {
    devices.windows(2).filter(|pair| pair[0] != pair[1]).count()
}
