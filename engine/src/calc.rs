//! Pure derivation of the three dashboard metrics from one set of reads.

use corelib::config::PipelineConfig;
use corelib::{ContractSnapshot, MetricsResult, PriceQuote, TokenAmount, UnitsError, format_fixed};

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const DAYS_PER_YEAR: u64 = 365;

/// Display value of the APR tile when there is no stake to divide by.
pub const APR_NOT_APPLICABLE: &str = "N/A";

/// Annualized reward rate of the pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Apr {
    Percent(f64),
    /// Nothing staked: the ratio is undefined.
    NotApplicable,
}

impl Apr {
    pub fn display(&self) -> String {
        match self {
            Apr::Percent(p) => format!("{}%", format_fixed(*p, 2)),
            Apr::NotApplicable => APR_NOT_APPLICABLE.to_string(),
        }
    }
}

pub fn blocks_per_day(seconds_per_block: u64) -> f64 {
    SECONDS_PER_DAY as f64 / seconds_per_block as f64
}

/// `reward_per_block * blocks_per_day * 365 / staked * 100`
pub fn annual_percentage_rate(
    staked: &TokenAmount,
    reward_per_block: &TokenAmount,
    seconds_per_block: u64,
) -> Result<Apr, UnitsError> {
    if staked.is_zero() || seconds_per_block == 0 {
        return Ok(Apr::NotApplicable);
    }

    let annual_reward =
        reward_per_block.to_f64()? * blocks_per_day(seconds_per_block) * DAYS_PER_YEAR as f64;
    // U256::MAX reward over 1 wei at 1 s blocks is ~3.7e86, far below f64::MAX
    Ok(Apr::Percent(annual_reward / staked.to_f64()? * 100.0))
}

pub fn liquidity_usd(staked: &TokenAmount, quote: &PriceQuote) -> Result<f64, UnitsError> {
    Ok(staked.to_f64()? * quote.usd_per_token)
}

/// Build the Liquidity, Staked and APR tiles.
pub fn derive_metrics(
    snapshot: &ContractSnapshot,
    quote: &PriceQuote,
    cfg: &PipelineConfig,
) -> Result<MetricsResult, UnitsError> {
    let staked = snapshot.staked_tokens(cfg.token_decimals)?;
    let reward = snapshot.reward_tokens_per_block(cfg.token_decimals)?;

    let liquidity = format!("$ {}", format_fixed(liquidity_usd(&staked, quote)?, 2));
    let staked_display = format!("{} {}", staked.to_fixed(2), cfg.token_symbol);
    let apr = annual_percentage_rate(&staked, &reward, cfg.seconds_per_block)?;

    Ok(MetricsResult::complete(liquidity, staked_display, apr.display()))
}
