//! Core error types for the Sarraf exchange tracker.
//!
//! This module defines transport-agnostic error types. HTTP-specific
//! failures are converted to these types by the connect layer.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::limits::LimitError;
use crate::rates::RateError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the exchange tracker.
///
/// Every error is recoverable by design: callers are expected to re-prompt
/// the user or render a placeholder, never to abort the session.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rate operation failed: {0}")]
    Rate(#[from] RateError),

    #[error("Submission rejected: {0}")]
    Limit(#[from] LimitError),

    #[error("Exchange API error: {0}")]
    Api(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{field}' must be greater than zero (got {value})")]
    NonPositiveAmount { field: String, value: Decimal },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
