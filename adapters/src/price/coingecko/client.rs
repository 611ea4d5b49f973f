use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::types::{MarketEntry, select_price};
use crate::price::{PriceFeed, errors::PriceFeedError};

const API_KEY_HEADER: &str = "x-cg-demo-api-key";

#[derive(Clone)]
pub struct CoinGeckoClient {
    http: Client,
    url: String,
    api_key: Option<String>,
}

impl CoinGeckoClient {
    pub fn new(
        url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, PriceFeedError> {
        let http = Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            url: url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    #[instrument(skip(self), fields(asset_id = %asset_id), level = "debug")]
    pub async fn fetch_markets(&self, asset_id: &str) -> Result<Vec<MarketEntry>, PriceFeedError> {
        let url = format!("{}/coins/markets", self.url);

        let mut req = self
            .http
            .get(&url)
            .query(&[("vs_currency", "usd"), ("ids", asset_id)]);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        let resp = req.send().await?.error_for_status()?;
        let body = resp.text().await?;

        let entries: Vec<MarketEntry> = serde_json::from_str(&body)
            .map_err(|e| PriceFeedError::InvalidResponse(e.to_string()))?;

        debug!(entries = entries.len(), "coingecko markets fetched");

        Ok(entries)
    }
}

#[async_trait]
impl PriceFeed for CoinGeckoClient {
    async fn usd_price(&self, asset_id: &str) -> Result<Option<f64>, PriceFeedError> {
        let entries = self.fetch_markets(asset_id).await?;
        Ok(select_price(&entries, asset_id))
    }
}
