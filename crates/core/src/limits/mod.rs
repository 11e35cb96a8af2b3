//! Session-scoped submission limiting.

mod limits_errors;
mod limits_service;

pub use limits_errors::LimitError;
pub use limits_service::{SubmissionLimitConfig, SubmissionLimiter};
