//! IP address analysis against the user's IP history

use super::{RiskRule, RuleOutcome};
use crate::types::{Transaction, UserHistory};
use std::net::IpAddr;

const NEW_IP_POINTS: i32 = 10;
const NO_HISTORY_POINTS: i32 = 2;
const SUSPICIOUS_PATTERN_POINTS: i32 = 15;

/// Flags IP addresses the user has never transacted from, plus addresses
/// that match a suspicious structural pattern
pub struct IpRule;

impl RiskRule for IpRule {
    fn name(&self) -> &'static str {
        "ip"
    }

    fn evaluate(&self, tx: &Transaction, history: &UserHistory) -> RuleOutcome {
        let mut outcome = RuleOutcome::clean();

        if history.ip_addresses.is_empty() {
            outcome.add_points(NO_HISTORY_POINTS);
        } else if !history.ip_addresses.iter().any(|ip| ip == &tx.ip_address) {
            outcome.record(
                NEW_IP_POINTS,
                format!("New IP address detected: {}", tx.ip_address),
            );
        }

        if is_suspicious_ip(&tx.ip_address) {
            outcome.record(
                SUSPICIOUS_PATTERN_POINTS,
                format!("Suspicious IP address pattern detected: {}", tx.ip_address),
            );
        }

        outcome
    }
}

/// Structural check only, no reputation lookups. Suspicious: an address
/// that does not parse, or parses to loopback/unspecified. RFC1918 private
/// ranges are not suspicious (gateway NAT).
fn is_suspicious_ip(ip_address: &str) -> bool {
    if ip_address.is_empty() {
        return false;
    }

    match ip_address.parse::<IpAddr>() {
        Ok(addr) => addr.is_loopback() || addr.is_unspecified(),
        Err(_) => true,
    }
}
