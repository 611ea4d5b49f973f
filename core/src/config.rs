use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::units::{ETHER_DECIMALS, MAX_DECIMALS};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not valid: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    // =========================
    // Chain configuration
    // =========================
    /// JSON-RPC endpoint of the chain hosting the staking contract.
    pub rpc_url: String,

    /// Address of the deployed staking pool contract (0x-prefixed hex).
    pub contract_address: String,

    /// Average block time of the chain.
    ///
    /// Used to turn "reward per block" into "reward per day".
    /// BNB Smart Chain produces a block roughly every 3 seconds.
    pub seconds_per_block: u64,

    // =========================
    // Token configuration
    // =========================
    /// Decimal exponent of the staked token (18 for ether-style tokens).
    pub token_decimals: u32,

    /// Ticker appended to the staked amount tile.
    pub token_symbol: String,

    // =========================
    // Price feed configuration
    // =========================
    /// Base URL of the CoinGecko-compatible market data API.
    pub price_api_url: String,

    /// Asset identifier understood by the price feed.
    pub price_asset_id: String,

    /// Optional demo API key, sent as `x-cg-demo-api-key`.
    pub price_api_key: Option<String>,

    // =========================
    // Remote call limits
    // =========================
    /// Upper bound for each individual remote read.
    ///
    /// Expiry counts as a failed read and aborts the refresh.
    pub request_timeout: Duration,

    /// Remote reads slower than this are logged under the `performance` target.
    pub slow_call_threshold: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://bsc-dataseed.binance.org/".to_string(),
            contract_address: "0xc864D1eCF4dD39e9A88066bd0EE0ee53E8c31cE2".to_string(),
            seconds_per_block: 3,

            token_decimals: ETHER_DECIMALS,
            token_symbol: "LIQ".to_string(),

            price_api_url: "https://api.coingecko.com/api/v3".to_string(),
            price_asset_id: "liquidus-2".to_string(),
            price_api_key: None,

            request_timeout: Duration::from_secs(10),
            slow_call_threshold: Duration::from_secs(2),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with any `STAKEBOARD_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();

        let cfg = Self {
            rpc_url: lookup("STAKEBOARD_RPC_URL").unwrap_or(d.rpc_url),
            contract_address: lookup("STAKEBOARD_CONTRACT_ADDRESS").unwrap_or(d.contract_address),
            seconds_per_block: parse_or(
                &lookup,
                "STAKEBOARD_SECONDS_PER_BLOCK",
                d.seconds_per_block,
            )?,

            token_decimals: parse_or(&lookup, "STAKEBOARD_TOKEN_DECIMALS", d.token_decimals)?,
            token_symbol: lookup("STAKEBOARD_TOKEN_SYMBOL").unwrap_or(d.token_symbol),

            price_api_url: lookup("STAKEBOARD_PRICE_API_URL").unwrap_or(d.price_api_url),
            price_asset_id: lookup("STAKEBOARD_PRICE_ASSET_ID").unwrap_or(d.price_asset_id),
            price_api_key: lookup("STAKEBOARD_PRICE_API_KEY").filter(|k| !k.is_empty()),

            request_timeout: Duration::from_millis(parse_or(
                &lookup,
                "STAKEBOARD_REQUEST_TIMEOUT_MS",
                d.request_timeout.as_millis() as u64,
            )?),
            slow_call_threshold: Duration::from_millis(parse_or(
                &lookup,
                "STAKEBOARD_SLOW_CALL_MS",
                d.slow_call_threshold.as_millis() as u64,
            )?),
        };

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rpc_url.trim().is_empty() {
            return Err(ConfigError::Empty("rpc_url"));
        }
        if self.contract_address.trim().is_empty() {
            return Err(ConfigError::Empty("contract_address"));
        }
        if self.price_api_url.trim().is_empty() {
            return Err(ConfigError::Empty("price_api_url"));
        }
        if self.price_asset_id.trim().is_empty() {
            return Err(ConfigError::Empty("price_asset_id"));
        }
        if self.seconds_per_block == 0 {
            return Err(ConfigError::Invalid {
                key: "seconds_per_block",
                reason: "must be greater than zero".into(),
            });
        }
        if self.token_decimals > MAX_DECIMALS {
            return Err(ConfigError::Invalid {
                key: "token_decimals",
                reason: format!("must be at most {MAX_DECIMALS}"),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                key: "request_timeout",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// The subset of settings the metrics pipeline needs.
    pub fn pipeline(&self) -> PipelineConfig {
        PipelineConfig {
            price_asset_id: self.price_asset_id.clone(),
            token_decimals: self.token_decimals,
            token_symbol: self.token_symbol.clone(),
            seconds_per_block: self.seconds_per_block,
            request_timeout: self.request_timeout,
            slow_call_threshold: self.slow_call_threshold,
        }
    }
}

/// Settings consumed by a single metrics computation.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub price_asset_id: String,
    pub token_decimals: u32,
    pub token_symbol: String,
    pub seconds_per_block: u64,
    pub request_timeout: Duration,
    pub slow_call_threshold: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        AppConfig::default().pipeline()
    }
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_source_chain() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(cfg.seconds_per_block, 3);
        assert_eq!(cfg.token_decimals, 18);
        assert_eq!(cfg.token_symbol, "LIQ");
        assert_eq!(cfg.price_asset_id, "liquidus-2");
        assert!(cfg.price_api_key.is_none());
        assert_eq!(cfg.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn env_overrides_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("STAKEBOARD_RPC_URL", "http://localhost:8545"),
            ("STAKEBOARD_SECONDS_PER_BLOCK", "12"),
            ("STAKEBOARD_TOKEN_SYMBOL", "XYZ"),
            ("STAKEBOARD_PRICE_API_KEY", "secret"),
            ("STAKEBOARD_REQUEST_TIMEOUT_MS", "250"),
        ]))
        .unwrap();

        assert_eq!(cfg.rpc_url, "http://localhost:8545");
        assert_eq!(cfg.seconds_per_block, 12);
        assert_eq!(cfg.token_symbol, "XYZ");
        assert_eq!(cfg.price_api_key.as_deref(), Some("secret"));
        assert_eq!(cfg.request_timeout, Duration::from_millis(250));

        let p = cfg.pipeline();
        assert_eq!(p.seconds_per_block, 12);
        assert_eq!(p.token_symbol, "XYZ");
    }

    #[test]
    fn rejects_zero_block_time() {
        let err = AppConfig::from_lookup(lookup_from(&[("STAKEBOARD_SECONDS_PER_BLOCK", "0")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "seconds_per_block",
                ..
            }
        ));
    }

    #[test]
    fn rejects_unparsable_numbers() {
        let err = AppConfig::from_lookup(lookup_from(&[("STAKEBOARD_TOKEN_DECIMALS", "eighteen")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "STAKEBOARD_TOKEN_DECIMALS",
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_endpoints() {
        let err =
            AppConfig::from_lookup(lookup_from(&[("STAKEBOARD_RPC_URL", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty("rpc_url"));
    }
}
