use std::sync::Arc;

use async_trait::async_trait;
use ethers::contract::abigen;
use ethers::providers::{Http, Provider};
use ethers::types::{Address, U256};
use tracing::{debug, instrument};

use super::{ContractReader, errors::ContractError};

// Only the read paths the dashboard uses; deposit/withdraw/admin are left out.
abigen!(
    SmartChefPool,
    r#"[
        function stakedTokenSupply() external view returns (uint256)
        function rewardPerBlock() external view returns (uint256)
    ]"#
);

/// Staking pool reader backed by an `ethers` HTTP JSON-RPC provider.
#[derive(Clone)]
pub struct SmartChefReader {
    pool: SmartChefPool<Provider<Http>>,
    address: Address,
}

impl SmartChefReader {
    pub fn new(rpc_url: &str, contract_address: &str) -> Result<Self, ContractError> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| ContractError::InvalidRpcUrl(e.to_string()))?;

        let address: Address = contract_address
            .trim()
            .parse()
            .map_err(|_| ContractError::InvalidAddress(contract_address.to_string()))?;

        Ok(Self {
            pool: SmartChefPool::new(address, Arc::new(provider)),
            address,
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

#[async_trait]
impl ContractReader for SmartChefReader {
    #[instrument(skip(self), fields(contract = ?self.address), level = "debug")]
    async fn staked_token_supply(&self) -> Result<U256, ContractError> {
        let value = self
            .pool
            .staked_token_supply()
            .call()
            .await
            .map_err(|e| ContractError::Call {
                method: "stakedTokenSupply",
                reason: e.to_string(),
            })?;

        debug!(%value, "staked token supply fetched");
        Ok(value)
    }

    #[instrument(skip(self), fields(contract = ?self.address), level = "debug")]
    async fn reward_per_block(&self) -> Result<U256, ContractError> {
        let value = self
            .pool
            .reward_per_block()
            .call()
            .await
            .map_err(|e| ContractError::Call {
                method: "rewardPerBlock",
                reason: e.to_string(),
            })?;

        debug!(%value, "reward per block fetched");
        Ok(value)
    }
}
