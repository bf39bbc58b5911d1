//! Error types for the fraud engine

use thiserror::Error;

/// Fraud engine error
#[derive(Debug, Error)]
pub enum Error {
    /// A required field is missing or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A field is present but malformed
    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
