#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use adapters::{ContractError, ContractReader, PriceFeed, PriceFeedError};
use async_trait::async_trait;
use corelib::U256;

pub fn tokens(whole: u64) -> U256 {
    U256::from(whole) * U256::exp10(18)
}

#[derive(Clone, Default)]
pub struct MockContract {
    pub staked: U256,
    pub reward: U256,
    pub fail_staked: bool,
    pub fail_reward: bool,
    pub delay: Duration,
    pub calls: Arc<AtomicUsize>,
}

impl MockContract {
    pub fn new(staked: U256, reward: U256) -> Self {
        Self {
            staked,
            reward,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_staked: true,
            fail_reward: true,
            ..Self::default()
        }
    }

    /// Only `rewardPerBlock` reverts; `stakedTokenSupply` still answers.
    pub fn failing_reward(staked: U256) -> Self {
        Self {
            staked,
            fail_reward: true,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn read(
        &self,
        method: &'static str,
        value: U256,
        fail: bool,
    ) -> Result<U256, ContractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if fail {
            return Err(ContractError::Call {
                method,
                reason: "execution reverted".into(),
            });
        }
        Ok(value)
    }
}

#[async_trait]
impl ContractReader for MockContract {
    async fn staked_token_supply(&self) -> Result<U256, ContractError> {
        self.read("stakedTokenSupply", self.staked, self.fail_staked)
            .await
    }

    async fn reward_per_block(&self) -> Result<U256, ContractError> {
        self.read("rewardPerBlock", self.reward, self.fail_reward)
            .await
    }
}

#[derive(Clone, Default)]
pub struct MockPrice {
    pub usd: Option<f64>,
    pub fail: bool,
    pub delay: Duration,
    pub asked_for: Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockPrice {
    pub fn quote(usd: f64) -> Self {
        Self {
            usd: Some(usd),
            ..Self::default()
        }
    }

    pub fn absent() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn asked_for(&self) -> Vec<String> {
        self.asked_for.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceFeed for MockPrice {
    async fn usd_price(&self, asset_id: &str) -> Result<Option<f64>, PriceFeedError> {
        self.asked_for.lock().unwrap().push(asset_id.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(PriceFeedError::InvalidResponse("rate limited".into()));
        }
        Ok(self.usd)
    }
}
