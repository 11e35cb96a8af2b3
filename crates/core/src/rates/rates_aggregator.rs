use rust_decimal::Decimal;

use super::rates_constants::OBSERVATION_SCALE;
use super::rates_model::Direction;
use crate::errors::ValidationError;
use crate::utils::ensure_positive;

/// Running average of observed unit rates, split by transaction direction.
///
/// Observations accumulate in insertion order for the lifetime of the
/// session; nothing is evicted or decayed, and the mean is recomputed from
/// the full history on every query. The buy series is kept in USD per 1 LBP
/// and the sell series in LBP per 1 USD, matching how each transaction kind
/// is quoted. Each stored observation carries at most [`OBSERVATION_SCALE`]
/// decimal places, so summation over a session's history is exact and the
/// mean is independent of insertion order.
#[derive(Debug, Default)]
pub struct RateAggregator {
    buy_observations: Vec<Decimal>,
    sell_observations: Vec<Decimal>,
}

impl RateAggregator {
    /// Creates an aggregator with no recorded observations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one transaction and derives its unit-rate observation.
    ///
    /// Both amounts must be strictly positive; otherwise the call fails and
    /// neither series changes. A `usd-to-lbp` transaction contributes
    /// `lbp_amount / usd_amount` to the sell series (LBP received per USD
    /// sold), a `lbp-to-usd` transaction contributes
    /// `usd_amount / lbp_amount` to the buy series (USD obtained per LBP).
    /// The derived ratio is rounded to [`OBSERVATION_SCALE`] decimal places
    /// before it is stored.
    pub fn record_transaction(
        &mut self,
        lbp_amount: Decimal,
        usd_amount: Decimal,
        direction: Direction,
    ) -> Result<(), ValidationError> {
        ensure_positive(lbp_amount, "lbp_amount")?;
        ensure_positive(usd_amount, "usd_amount")?;

        match direction {
            Direction::UsdToLbp => self
                .sell_observations
                .push((lbp_amount / usd_amount).round_dp(OBSERVATION_SCALE)),
            Direction::LbpToUsd => self
                .buy_observations
                .push((usd_amount / lbp_amount).round_dp(OBSERVATION_SCALE)),
        }
        Ok(())
    }

    /// Mean buy rate in USD per 1 LBP, or `None` before the first buy.
    pub fn average_buy_rate(&self) -> Option<Decimal> {
        Self::mean(&self.buy_observations)
    }

    /// Mean sell rate in LBP per 1 USD, or `None` before the first sale.
    pub fn average_sell_rate(&self) -> Option<Decimal> {
        Self::mean(&self.sell_observations)
    }

    /// Number of recorded buy observations.
    pub fn buy_observation_count(&self) -> usize {
        self.buy_observations.len()
    }

    /// Number of recorded sell observations.
    pub fn sell_observation_count(&self) -> usize {
        self.sell_observations.len()
    }

    fn mean(observations: &[Decimal]) -> Option<Decimal> {
        if observations.is_empty() {
            return None;
        }
        let sum: Decimal = observations.iter().copied().sum();
        Some(sum / Decimal::from(observations.len() as u64))
    }
}
