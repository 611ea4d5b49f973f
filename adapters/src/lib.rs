//! Read-only access to the outside world: the staking contract and the price feed.
//!
//! Each remote service sits behind a small capability trait so the metrics
//! pipeline can be driven by real clients in production and by fakes in tests.

pub mod contract;
pub mod price;

pub use contract::{ContractError, ContractReader, SmartChefReader};
pub use price::{CoinGeckoClient, PriceFeed, PriceFeedError};
