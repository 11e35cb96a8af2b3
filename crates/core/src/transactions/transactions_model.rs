use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::rates::Direction;
use crate::utils::{ensure_positive, parse_positive_amount};

/// A recorded exchange transaction, as returned by the platform.
///
/// Ids are assigned by the backend; `transaction_time` may be absent on
/// rows the backend recorded without a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub usd_amount: Decimal,
    pub lbp_amount: Decimal,
    pub direction: Direction,
    pub transaction_time: Option<DateTime<Utc>>,
}

/// A validated transaction submission.
///
/// Only constructible through [`NewTransaction::new`] or
/// [`NewTransaction::from_input`], so both amounts are guaranteed to be
/// strictly positive by the time a value exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub usd_amount: Decimal,
    pub lbp_amount: Decimal,
    pub direction: Direction,
}

impl NewTransaction {
    pub fn new(
        usd_amount: Decimal,
        lbp_amount: Decimal,
        direction: Direction,
    ) -> Result<Self, ValidationError> {
        ensure_positive(usd_amount, "usd_amount")?;
        ensure_positive(lbp_amount, "lbp_amount")?;
        Ok(Self {
            usd_amount,
            lbp_amount,
            direction,
        })
    }

    /// Builds a submission from the raw form fields.
    ///
    /// Both amounts must parse as strictly positive decimals and the
    /// direction token must be one of the two known values. Nothing is
    /// constructed on failure.
    pub fn from_input(
        lbp_amount: &str,
        usd_amount: &str,
        direction: &str,
    ) -> Result<Self, ValidationError> {
        let lbp_amount = parse_positive_amount(lbp_amount, "lbp_amount")?;
        let usd_amount = parse_positive_amount(usd_amount, "usd_amount")?;
        let direction = direction.parse::<Direction>()?;
        Ok(Self {
            usd_amount,
            lbp_amount,
            direction,
        })
    }
}
