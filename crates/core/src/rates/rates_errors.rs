use thiserror::Error;

use super::rates_model::Side;

/// Errors raised by rate lookups and conversions.
#[derive(Error, Debug)]
pub enum RateError {
    /// The requested side of the quote has no rate yet.
    #[error("{0} rate is not available yet")]
    Unavailable(Side),

    /// The shared quote cache could not be read or written.
    #[error("Cache error: {0}")]
    CacheError(String),
}
