pub mod client;
pub mod types;

pub use client::CoinGeckoClient;
pub use types::MarketEntry;
