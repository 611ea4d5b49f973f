use std::time::Duration;

use clap::{Parser, ValueEnum};
use corelib::config::{AppConfig, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Three labeled tiles side by side
    Tiles,
    /// One JSON document per refresh
    Json,
}

#[derive(Debug, Parser)]
#[clap(
    name = "stakeboard",
    version,
    about = "Liquidity, staked amount and APR of a staking pool"
)]
pub struct Cli {
    /// JSON-RPC endpoint of the chain (overrides STAKEBOARD_RPC_URL)
    #[clap(long)]
    pub rpc_url: Option<String>,

    /// Staking pool contract address (overrides STAKEBOARD_CONTRACT_ADDRESS)
    #[clap(long)]
    pub contract: Option<String>,

    /// Price feed asset id (overrides STAKEBOARD_PRICE_ASSET_ID)
    #[clap(long)]
    pub asset_id: Option<String>,

    /// Average block time in seconds (overrides STAKEBOARD_SECONDS_PER_BLOCK)
    #[clap(long)]
    pub seconds_per_block: Option<u64>,

    /// Per-call timeout in milliseconds (overrides STAKEBOARD_REQUEST_TIMEOUT_MS)
    #[clap(long)]
    pub timeout_ms: Option<u64>,

    /// Keep running and refresh every SECS seconds
    #[clap(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub watch: Option<u64>,

    /// Exit with an error instead of printing nothing when metrics are unavailable
    #[clap(long)]
    pub strict: bool,

    #[clap(long, value_enum, default_value_t = OutputFormat::Tiles)]
    pub output: OutputFormat,
}

impl Cli {
    /// Layer command-line flags over the environment-derived configuration.
    pub(crate) fn apply(&self, mut cfg: AppConfig) -> Result<AppConfig, ConfigError> {
        if let Some(url) = &self.rpc_url {
            cfg.rpc_url = url.clone();
        }
        if let Some(addr) = &self.contract {
            cfg.contract_address = addr.clone();
        }
        if let Some(asset) = &self.asset_id {
            cfg.price_asset_id = asset.clone();
        }
        if let Some(secs) = self.seconds_per_block {
            cfg.seconds_per_block = secs;
        }
        if let Some(ms) = self.timeout_ms {
            cfg.request_timeout = Duration::from_millis(ms);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub(crate) fn watch_interval(&self) -> Option<Duration> {
        self.watch.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "stakeboard",
            "--rpc-url",
            "http://127.0.0.1:8545",
            "--seconds-per-block",
            "2",
            "--timeout-ms",
            "1500",
            "--output",
            "json",
        ]);

        let cfg = cli.apply(AppConfig::default()).unwrap();

        assert_eq!(cfg.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(cfg.seconds_per_block, 2);
        assert_eq!(cfg.request_timeout, Duration::from_millis(1500));
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.watch_interval().is_none());
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = Cli::parse_from(["stakeboard", "--seconds-per-block", "0"]);
        assert!(cli.apply(AppConfig::default()).is_err());
    }

    #[test]
    fn watch_must_be_positive() {
        assert!(Cli::try_parse_from(["stakeboard", "--watch", "0"]).is_err());

        let cli = Cli::parse_from(["stakeboard", "--watch", "15"]);
        assert_eq!(cli.watch_interval(), Some(Duration::from_secs(15)));
    }
}
