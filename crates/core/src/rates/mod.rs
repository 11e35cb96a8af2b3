//! Exchange rate module - domain models, aggregation, and conversion.

mod rates_aggregator;
mod rates_constants;
mod rates_errors;
mod rates_model;
mod rates_service;
mod rates_traits;


pub use rates_aggregator::RateAggregator;
pub use rates_constants::*;
pub use rates_errors::RateError;
pub use rates_model::{Direction, QuotedRate, Side};
pub use rates_service::RateService;
pub use rates_traits::RateSourceTrait;
