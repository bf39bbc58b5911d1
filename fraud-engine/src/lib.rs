//! Fraud scoring engine
//!
//! Deterministic rule-based risk scoring for financial transactions. One
//! evaluation reads a validated transaction plus optional caller-supplied
//! history and produces a 0-100 score, the triggered risk factors, a
//! reasoning narrative and a recommended action.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod error;
pub mod rules;
pub mod scoring;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod testutil;

pub use batch::{BatchReport, BatchSummary, RejectedRecord, TransactionProcessor};
pub use config::{DecisionThresholds, EngineConfig};
pub use error::{Error, Result};
pub use scoring::FraudScorer;
pub use types::*;
pub use validate::TransactionRecord;
