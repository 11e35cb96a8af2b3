pub mod amount_utils;
pub mod display_utils;

pub use amount_utils::{ensure_positive, parse_amount, parse_positive_amount};
pub use display_utils::{format_amount, format_quoted_rate, RATE_PLACEHOLDER};
