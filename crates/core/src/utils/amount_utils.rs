//! Parsing helpers for raw amount strings.
//!
//! Form fields and the calculator hand amounts over as free text; these
//! helpers are the single place where that text becomes a `Decimal`.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Parses a raw amount string into a finite decimal.
///
/// The value is trimmed first; an empty string reports the missing field
/// rather than a parse failure. Scientific notation ("1e3") is accepted,
/// since number inputs occasionally produce it.
pub fn parse_amount(value: &str, field: &str) -> Result<Decimal, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field.to_string()));
    }
    match Decimal::from_str(trimmed) {
        Ok(amount) => Ok(amount),
        Err(_) => Ok(Decimal::from_scientific(trimmed)?),
    }
}

/// Parses a raw amount string and requires it to be strictly positive.
pub fn parse_positive_amount(value: &str, field: &str) -> Result<Decimal, ValidationError> {
    let amount = parse_amount(value, field)?;
    ensure_positive(amount, field)
}

/// Rejects zero or negative amounts.
pub fn ensure_positive(value: Decimal, field: &str) -> Result<Decimal, ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_trims_whitespace() {
        assert_eq!(parse_amount(" 89000.50 ", "amount").unwrap(), dec!(89000.50));
    }

    #[test]
    fn test_parse_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("1e3", "amount").unwrap(), dec!(1000));
    }

    #[test]
    fn test_parse_amount_reports_empty_as_missing_field() {
        let err = parse_amount("   ", "lbp_amount").unwrap_err();
        assert!(matches!(err, ValidationError::MissingField(field) if field == "lbp_amount"));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("ninety", "amount").unwrap_err(),
            ValidationError::DecimalParse(_)
        ));
        assert!(matches!(
            parse_amount("NaN", "amount").unwrap_err(),
            ValidationError::DecimalParse(_)
        ));
    }

    #[test]
    fn test_parse_positive_amount_rejects_zero_and_negative() {
        assert!(matches!(
            parse_positive_amount("0", "usd_amount").unwrap_err(),
            ValidationError::NonPositiveAmount { .. }
        ));
        assert!(matches!(
            parse_positive_amount("-15.5", "usd_amount").unwrap_err(),
            ValidationError::NonPositiveAmount { .. }
        ));
        assert_eq!(
            parse_positive_amount("15.5", "usd_amount").unwrap(),
            dec!(15.5)
        );
    }

    #[test]
    fn test_ensure_positive_passes_value_through() {
        assert_eq!(ensure_positive(dec!(0.01), "amount").unwrap(), dec!(0.01));
        assert!(ensure_positive(dec!(0), "amount").is_err());
    }
}
