use async_trait::async_trait;

use super::rates_model::QuotedRate;
use crate::errors::Result;

/// Trait defining the contract for the external rate feed.
///
/// Implementations fetch the currently published pair on demand; deciding
/// when a fetch happens is the caller's job.
#[async_trait]
pub trait RateSourceTrait: Send + Sync {
    /// Fetches the latest quoted pair from the feed.
    async fn fetch_latest(&self) -> Result<QuotedRate>;
}
