//! Record validation
//!
//! Raw wire records are checked here, before the evaluator ever sees them.
//! The evaluator itself assumes validity; anything missing or malformed is
//! rejected with a field-level error at this boundary.

use crate::error::{Error, Result};
use crate::types::{PaymentMethod, Transaction, UserHistory};
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A raw transaction record in wire format. Unknown fields are ignored;
/// history fields ride along inline, as in the upstream feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionRecord {
    /// Opaque transaction identifier (required)
    pub transaction_id: Option<String>,

    /// Opaque user identifier (required)
    pub user_id: Option<String>,

    /// Transaction amount (required, non-negative)
    pub amount: Option<Decimal>,

    /// Currency code, defaults to USD
    pub currency: Option<String>,

    /// Timestamp string, RFC3339 or naive ISO-8601 assumed UTC (required)
    pub transaction_time: Option<String>,

    /// Merchant display name
    pub merchant_name: Option<String>,

    /// Merchant category
    pub merchant_category: Option<String>,

    /// Payment method name (required, one of the closed set)
    pub payment_method: Option<String>,

    /// User location as "City, Country"
    pub user_location: Option<String>,

    /// Merchant location as "City, Country"
    pub merchant_location: Option<String>,

    /// Device type
    pub device_type: Option<String>,

    /// Originating IP address
    pub ip_address: Option<String>,

    /// Transactions by this user in the last 24 hours (non-negative)
    pub transaction_frequency_24h: Option<i64>,

    /// User's average transaction amount baseline (non-negative)
    pub avg_user_transaction_amount: Option<Decimal>,

    /// Previously seen device types
    pub user_device_history: Option<Vec<String>>,

    /// Previously seen locations
    pub user_location_history: Option<Vec<String>>,

    /// Previously seen IP addresses
    pub user_ip_history: Option<Vec<String>>,

    /// Whether the user has transacted internationally before
    pub user_international_history: Option<bool>,
}

impl TransactionRecord {
    /// Validate the raw record into a typed transaction plus history.
    ///
    /// Missing history lists become empty lists; a missing international
    /// flag is treated as false.
    pub fn validate(self) -> Result<(Transaction, UserHistory)> {
        let transaction_id = required(self.transaction_id, "transaction_id")?;
        let user_id = required(self.user_id, "user_id")?;

        let amount = self.amount.ok_or(Error::MissingField("amount"))?;
        if amount < Decimal::ZERO {
            return Err(Error::InvalidField {
                field: "amount",
                reason: format!("must be non-negative, got {}", amount),
            });
        }

        let raw_time = required(self.transaction_time, "transaction_time")?;
        let timestamp = parse_timestamp(&raw_time)?;

        let raw_method = required(self.payment_method, "payment_method")?;
        let payment_method =
            PaymentMethod::parse(&raw_method).ok_or_else(|| Error::InvalidField {
                field: "payment_method",
                reason: format!("unknown payment method: {}", raw_method),
            })?;

        let frequency_24h = match self.transaction_frequency_24h.unwrap_or(0) {
            count if count < 0 => {
                return Err(Error::InvalidField {
                    field: "transaction_frequency_24h",
                    reason: format!("must be non-negative, got {}", count),
                })
            }
            count => count.try_into().map_err(|_| Error::InvalidField {
                field: "transaction_frequency_24h",
                reason: format!("count out of range: {}", count),
            })?,
        };

        let avg_amount = self.avg_user_transaction_amount.unwrap_or(Decimal::ZERO);
        if avg_amount < Decimal::ZERO {
            return Err(Error::InvalidField {
                field: "avg_user_transaction_amount",
                reason: format!("must be non-negative, got {}", avg_amount),
            });
        }

        let transaction = Transaction {
            transaction_id,
            user_id,
            amount,
            currency: self.currency.unwrap_or_else(|| "USD".to_string()),
            timestamp,
            merchant_name: self.merchant_name.unwrap_or_default(),
            merchant_category: self.merchant_category.unwrap_or_default(),
            payment_method,
            user_location: self.user_location.unwrap_or_default(),
            merchant_location: self.merchant_location.unwrap_or_default(),
            device_type: self.device_type.unwrap_or_default(),
            ip_address: self.ip_address.unwrap_or_default(),
            frequency_24h,
            avg_amount,
        };

        let history = UserHistory {
            device_types: self.user_device_history.unwrap_or_default(),
            locations: self.user_location_history.unwrap_or_default(),
            ip_addresses: self.user_ip_history.unwrap_or_default(),
            international: self.user_international_history.unwrap_or(false),
        };

        Ok((transaction, history))
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingField(field)),
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.with_timezone(&Utc));
    }

    // Naive ISO-8601, assumed UTC
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Ok(naive.and_utc());
        }
    }

    Err(Error::InvalidField {
        field: "transaction_time",
        reason: format!("unparsable timestamp: {}", raw),
    })
}
