pub mod coingecko;
pub mod errors;

use async_trait::async_trait;

pub use coingecko::CoinGeckoClient;
pub use errors::PriceFeedError;

/// USD market price lookup.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Price of one whole token in USD.
    ///
    /// `Ok(None)` means the feed answered but has no usable price for `asset_id`.
    async fn usd_price(&self, asset_id: &str) -> Result<Option<f64>, PriceFeedError>;
}
