//! Location analysis: cross-border mismatches and unseen locations

use super::{RiskRule, RuleOutcome};
use crate::types::{Transaction, UserHistory};

const INTERNATIONAL_NO_HISTORY_POINTS: i32 = 30;
const INTERNATIONAL_POINTS: i32 = 5;
const NEW_LOCATION_POINTS: i32 = 15;

/// Flags international transactions and locations the user has never
/// transacted from before
pub struct LocationRule;

impl RiskRule for LocationRule {
    fn name(&self) -> &'static str {
        "location"
    }

    fn evaluate(&self, tx: &Transaction, history: &UserHistory) -> RuleOutcome {
        let mut outcome = RuleOutcome::clean();

        let user_country = country_of(&tx.user_location);
        let merchant_country = country_of(&tx.merchant_location);

        if let (Some(user_country), Some(merchant_country)) = (user_country, merchant_country) {
            if user_country != merchant_country {
                if history.international {
                    outcome.record(
                        INTERNATIONAL_POINTS,
                        format!(
                            "International transaction: {} -> {}",
                            user_country, merchant_country
                        ),
                    );
                } else {
                    outcome.record(
                        INTERNATIONAL_NO_HISTORY_POINTS,
                        format!(
                            "International transaction without history: {} -> {}",
                            user_country, merchant_country
                        ),
                    );
                }
            }
        }

        if !history.locations.is_empty()
            && !history.locations.iter().any(|l| l == &tx.user_location)
        {
            outcome.record(
                NEW_LOCATION_POINTS,
                format!("New location detected: {}", tx.user_location),
            );
        }

        outcome
    }
}

/// Extract the country segment from a "City, Country" string: the last
/// comma-separated part, trimmed. A bare country string passes through.
fn country_of(location: &str) -> Option<String> {
    let country = location.rsplit(',').next()?.trim();
    if country.is_empty() {
        None
    } else {
        Some(country.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{matching_history, transaction};

    #[test]
    fn test_country_extraction() {
        assert_eq!(country_of("New York, USA"), Some("USA".to_string()));
        assert_eq!(country_of("USA"), Some("USA".to_string()));
        assert_eq!(country_of("  Mumbai , India "), Some("India".to_string()));
        assert_eq!(country_of(""), None);
    }

    #[test]
    fn test_international_without_history() {
        let mut tx = transaction();
        tx.user_location = "New York, USA".to_string();
        tx.merchant_location = "Moscow, Russia".to_string();

        let out = LocationRule.evaluate(&tx, &UserHistory::default());
        assert_eq!(out.points, 30);
        assert!(out.factors[0].contains("USA -> Russia"));
    }

    #[test]
    fn test_international_with_history_is_minor() {
        let mut tx = transaction();
        tx.merchant_location = "London, UK".to_string();
        let history = UserHistory {
            international: true,
            locations: vec![tx.user_location.clone()],
            ..UserHistory::default()
        };

        let out = LocationRule.evaluate(&tx, &history);
        assert_eq!(out.points, 5);
    }

    #[test]
    fn test_new_location_adds_points() {
        let mut tx = transaction();
        tx.user_location = "Denver, USA".to_string();
        tx.merchant_location = "Denver, USA".to_string();
        let history = matching_history(); // only knows Austin

        let out = LocationRule.evaluate(&tx, &history);
        assert_eq!(out.points, 15);
        assert!(out.factors[0].contains("New location"));
    }

    #[test]
    fn test_domestic_known_location_is_clean() {
        let out = LocationRule.evaluate(&transaction(), &matching_history());
        assert_eq!(out.points, 0);
        assert!(out.factors.is_empty());
    }

    #[test]
    fn test_empty_history_skips_location_check() {
        // Country mismatch still fires, but the new-location check needs
        // a non-empty history list.
        let out = LocationRule.evaluate(&transaction(), &UserHistory::default());
        assert_eq!(out.points, 0);
    }
}
