//! Core types for the fraud scoring engine

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment method accepted by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Unified Payments Interface transfer
    Upi,
    /// Debit or credit card
    Card,
    /// Net banking transfer
    NetBanking,
    /// Stored-value wallet
    Wallet,
}

impl PaymentMethod {
    /// Parse a wire-format payment method string (case-insensitive)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "upi" => Some(PaymentMethod::Upi),
            "card" => Some(PaymentMethod::Card),
            "net banking" | "netbanking" | "net_banking" => Some(PaymentMethod::NetBanking),
            "wallet" => Some(PaymentMethod::Wallet),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
            PaymentMethod::NetBanking => "Net Banking",
            PaymentMethod::Wallet => "Wallet",
        };
        write!(f, "{}", name)
    }
}

/// A validated transaction record, immutable for the duration of one evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque transaction identifier
    pub transaction_id: String,

    /// Opaque user identifier
    pub user_id: String,

    /// Transaction amount (non-negative)
    pub amount: Decimal,

    /// Currency code
    pub currency: String,

    /// Transaction timestamp, UTC
    pub timestamp: DateTime<Utc>,

    /// Merchant display name
    pub merchant_name: String,

    /// Merchant category (free-form)
    pub merchant_category: String,

    /// Payment method
    pub payment_method: PaymentMethod,

    /// User location as "City, Country"
    pub user_location: String,

    /// Merchant location as "City, Country"
    pub merchant_location: String,

    /// Device type (e.g. "mobile", "web")
    pub device_type: String,

    /// Originating IP address
    pub ip_address: String,

    /// Number of transactions by this user in the last 24 hours
    pub frequency_24h: u32,

    /// User's average transaction amount baseline
    pub avg_amount: Decimal,
}

/// Caller-supplied historical context for a user, read-only
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserHistory {
    /// Previously seen device types, in order
    pub device_types: Vec<String>,

    /// Previously seen locations, in order
    pub locations: Vec<String>,

    /// Previously seen IP addresses, in order
    pub ip_addresses: Vec<String>,

    /// Whether the user has transacted internationally before
    pub international: bool,
}

/// Risk score (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RiskScore(u8);

impl RiskScore {
    /// Clamp a raw point total into the 0-100 range
    pub fn from_points(points: i32) -> Self {
        Self(points.clamp(0, 100) as u8)
    }

    /// Get raw score
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fraud status tier derived from the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FraudStatus {
    /// Score below the review threshold
    Legitimate,
    /// Score at or above the review threshold but below the block threshold
    Suspicious,
    /// Score at or above the block threshold
    Fraudulent,
}

impl fmt::Display for FraudStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FraudStatus::Legitimate => "Legitimate",
            FraudStatus::Suspicious => "Suspicious",
            FraudStatus::Fraudulent => "Fraudulent",
        };
        write!(f, "{}", name)
    }
}

/// Recommended action, determined solely by the score thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendedAction {
    /// Let the transaction through
    #[serde(rename = "Allow transaction")]
    Allow,
    /// Hold for manual review
    #[serde(rename = "Flag for review")]
    Review,
    /// Block before settlement
    #[serde(rename = "Block transaction immediately")]
    Block,
}

impl From<FraudStatus> for RecommendedAction {
    fn from(status: FraudStatus) -> Self {
        match status {
            FraudStatus::Legitimate => RecommendedAction::Allow,
            FraudStatus::Suspicious => RecommendedAction::Review,
            FraudStatus::Fraudulent => RecommendedAction::Block,
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecommendedAction::Allow => "Allow transaction",
            RecommendedAction::Review => "Flag for review",
            RecommendedAction::Block => "Block transaction immediately",
        };
        write!(f, "{}", name)
    }
}

/// Fraud assessment result, created fresh per evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Transaction ID echoed from the input
    pub transaction_id: String,

    /// Fraud status tier
    pub fraud_status: FraudStatus,

    /// Final clamped risk score
    pub risk_score: RiskScore,

    /// Triggered risk factors, in rule-evaluation order
    pub risk_factors: Vec<String>,

    /// Human-readable narrative built from the triggered factors
    pub reasoning: String,

    /// Recommended action
    pub recommended_action: RecommendedAction,
}
