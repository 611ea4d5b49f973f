pub mod errors;
pub mod smartchef;

use async_trait::async_trait;
use corelib::U256;

pub use errors::ContractError;
pub use smartchef::SmartChefReader;

/// The two view functions of the staking pool the dashboard depends on.
#[async_trait]
pub trait ContractReader: Send + Sync {
    /// Total tokens currently staked in the pool, in the token's smallest unit.
    async fn staked_token_supply(&self) -> Result<U256, ContractError>;

    /// Reward tokens emitted per block, in the token's smallest unit.
    async fn reward_per_block(&self) -> Result<U256, ContractError>;
}
