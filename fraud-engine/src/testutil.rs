//! Shared fixtures for unit tests

use crate::types::{PaymentMethod, Transaction, UserHistory};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

/// A benign baseline transaction: mid-day card purchase at a neutral
/// merchant, amount equal to the user's average.
pub fn transaction() -> Transaction {
    Transaction {
        transaction_id: "TXN-1001".to_string(),
        user_id: "USR-42".to_string(),
        amount: Decimal::from(100),
        currency: "USD".to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 3, 14, 14, 30, 0).unwrap(),
        merchant_name: "Corner Books".to_string(),
        merchant_category: "books".to_string(),
        payment_method: PaymentMethod::Card,
        user_location: "Austin, USA".to_string(),
        merchant_location: "Austin, USA".to_string(),
        device_type: "mobile".to_string(),
        ip_address: "203.0.113.7".to_string(),
        frequency_24h: 1,
        avg_amount: Decimal::from(100),
    }
}

/// History that matches the baseline transaction on every dimension.
pub fn matching_history() -> UserHistory {
    UserHistory {
        device_types: vec!["mobile".to_string()],
        locations: vec!["Austin, USA".to_string()],
        ip_addresses: vec!["203.0.113.7".to_string()],
        international: false,
    }
}
