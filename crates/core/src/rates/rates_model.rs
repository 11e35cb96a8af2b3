//! Rate domain models: transaction direction, quote side, and the quoted pair.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::rates_constants::{
    DIRECTION_LBP_TO_USD, DIRECTION_USD_TO_LBP, SIDE_BUY, SIDE_SELL,
};
use super::rates_errors::RateError;
use crate::errors::ValidationError;

/// Direction of a recorded exchange transaction, seen from the user.
///
/// `UsdToLbp` means the user handed over USD and received LBP (the platform
/// bought USD); `LbpToUsd` is the reverse. The direction decides which
/// observation series a transaction feeds; the two series are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    UsdToLbp,
    LbpToUsd,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::UsdToLbp => DIRECTION_USD_TO_LBP,
            Direction::LbpToUsd => DIRECTION_LBP_TO_USD,
        }
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            DIRECTION_USD_TO_LBP => Ok(Direction::UsdToLbp),
            DIRECTION_LBP_TO_USD => Ok(Direction::LbpToUsd),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown transaction direction '{}', expected '{}' or '{}'",
                other, DIRECTION_USD_TO_LBP, DIRECTION_LBP_TO_USD
            ))),
        }
    }
}

/// Which side of the quoted pair a conversion draws on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => SIDE_BUY,
            Side::Sell => SIDE_SELL,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            SIDE_BUY => Ok(Side::Buy),
            SIDE_SELL => Ok(Side::Sell),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown quote side '{}', expected '{}' or '{}'",
                other, SIDE_BUY, SIDE_SELL
            ))),
        }
    }
}

/// The current published (buy, sell) pair shown to users.
///
/// Both sides are expressed in LBP per 1 USD: `buy` is the price to acquire
/// USD, `sell` the amount received per USD sold. Either side may still be
/// unknown. The pair is replaced wholesale on each update, never partially
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuotedRate {
    pub buy: Option<Decimal>,
    pub sell: Option<Decimal>,
}

impl QuotedRate {
    pub fn new(buy: Option<Decimal>, sell: Option<Decimal>) -> Self {
        Self { buy, sell }
    }

    /// The rate backing the given side, if it is known yet.
    pub fn rate_for(&self, side: Side) -> Option<Decimal> {
        match side {
            Side::Buy => self.buy,
            Side::Sell => self.sell,
        }
    }

    /// Applies the quoted rate for `side` to `amount`.
    ///
    /// Plain multiplication, no rounding; rendering precision is the display
    /// layer's concern. Fails with [`RateError::Unavailable`] while the
    /// relevant side is unknown, whatever the amount.
    pub fn convert(&self, amount: Decimal, side: Side) -> Result<Decimal, RateError> {
        let rate = self.rate_for(side).ok_or(RateError::Unavailable(side))?;
        Ok(amount * rate)
    }
}
