use std::sync::{Arc, RwLock};

use log::{debug, warn};
use rust_decimal::Decimal;

use super::rates_errors::RateError;
use super::rates_model::{QuotedRate, Side};
use super::rates_traits::RateSourceTrait;
use crate::errors::Result;
use crate::utils::parse_amount;

/// Session-scoped access to the published exchange rate.
///
/// Caches the most recently fetched [`QuotedRate`] and applies it to
/// calculator inputs. The service never fetches on its own initiative;
/// `refresh_quote` is driven by the caller (page load, post-submit
/// refresh).
pub struct RateService {
    source: Arc<dyn RateSourceTrait>,
    quote: Arc<RwLock<Option<QuotedRate>>>,
}

impl RateService {
    pub fn new(source: Arc<dyn RateSourceTrait>) -> Self {
        Self {
            source,
            quote: Arc::new(RwLock::new(None)),
        }
    }

    /// Fetches the latest pair from the source and replaces the cached
    /// quote wholesale.
    pub async fn refresh_quote(&self) -> Result<QuotedRate> {
        let quote = self.source.fetch_latest().await?;

        if quote.buy.is_none() && quote.sell.is_none() {
            warn!("Rate feed returned no usable rates yet");
        }

        let mut cached = self
            .quote
            .write()
            .map_err(|e| RateError::CacheError(e.to_string()))?;
        *cached = Some(quote);

        debug!(
            "Cached quote replaced: buy={:?} sell={:?}",
            quote.buy, quote.sell
        );
        Ok(quote)
    }

    /// The most recently cached quote, or `None` before the first
    /// successful refresh.
    pub fn get_quote(&self) -> Result<Option<QuotedRate>> {
        let cached = self
            .quote
            .read()
            .map_err(|e| RateError::CacheError(e.to_string()))?;
        Ok(*cached)
    }

    /// Converts `amount` using the cached rate for `side`.
    pub fn convert(&self, amount: Decimal, side: Side) -> Result<Decimal> {
        let quote = self.get_quote()?.ok_or(RateError::Unavailable(side))?;
        Ok(quote.convert(amount, side)?)
    }

    /// Calculator entry point: parses the raw amount, then converts it.
    ///
    /// A string that does not parse fails with a validation error, distinct
    /// from the rate being unavailable.
    pub fn convert_input(&self, amount: &str, side: Side) -> Result<Decimal> {
        let amount = parse_amount(amount, "amount")?;
        self.convert(amount, side)
    }
}
