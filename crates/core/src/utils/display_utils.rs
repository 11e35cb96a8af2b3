//! Formatting helpers for the rendering layer.
//!
//! The domain never rounds; these helpers apply the display precision
//! when an amount or rate is turned into user-facing text.

use rust_decimal::Decimal;

use crate::constants::{CURRENCY_LBP, CURRENCY_USD, DISPLAY_DECIMAL_PRECISION};

/// Placeholder shown while a rate is still unknown.
pub const RATE_PLACEHOLDER: &str = "Not available yet";

/// Formats an amount with the display precision, e.g. `9000000.00`.
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.prec$}",
        amount.round_dp(DISPLAY_DECIMAL_PRECISION),
        prec = DISPLAY_DECIMAL_PRECISION as usize
    )
}

/// Formats one side of the quoted pair, e.g. `89000.00 LBP per 1 USD`,
/// or the placeholder while that side is unknown.
pub fn format_quoted_rate(rate: Option<Decimal>) -> String {
    match rate {
        Some(rate) => format!(
            "{} {} per 1 {}",
            format_amount(rate),
            CURRENCY_LBP,
            CURRENCY_USD
        ),
        None => RATE_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount_uses_two_decimal_places() {
        assert_eq!(format_amount(dec!(9000000)), "9000000.00");
        assert_eq!(format_amount(dec!(89000.756)), "89000.76");
        assert_eq!(format_amount(dec!(0.5)), "0.50");
    }

    #[test]
    fn test_format_quoted_rate_labels_the_units() {
        assert_eq!(
            format_quoted_rate(Some(dec!(89000))),
            "89000.00 LBP per 1 USD"
        );
    }

    #[test]
    fn test_format_quoted_rate_placeholder_when_unknown() {
        assert_eq!(format_quoted_rate(None), RATE_PLACEHOLDER);
    }
}
