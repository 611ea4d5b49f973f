use ethers::types::U256;

use crate::units::{TokenAmount, UnitsError};

/// One point-in-time read of the staking contract, in smallest token units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractSnapshot {
    pub staked_token_supply: U256,
    pub reward_per_block: U256,
}

impl ContractSnapshot {
    pub fn staked_tokens(&self, decimals: u32) -> Result<TokenAmount, UnitsError> {
        TokenAmount::new(self.staked_token_supply, decimals)
    }

    pub fn reward_tokens_per_block(&self, decimals: u32) -> Result<TokenAmount, UnitsError> {
        TokenAmount::new(self.reward_per_block, decimals)
    }
}

/// USD price of one whole token.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub asset_id: String,
    pub usd_per_token: f64,
}

impl PriceQuote {
    /// Build a quote from a raw feed value.
    ///
    /// A missing, zero, negative or non-finite price means "no price".
    pub fn from_feed(asset_id: impl Into<String>, usd_per_token: Option<f64>) -> Option<Self> {
        let usd_per_token = usd_per_token.filter(|p| p.is_finite() && *p > 0.0)?;
        Some(Self {
            asset_id: asset_id.into(),
            usd_per_token,
        })
    }
}
