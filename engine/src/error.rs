use std::fmt;
use std::time::Duration;

use adapters::{ContractError, PriceFeedError};
use corelib::UnitsError;
use thiserror::Error;

/// The remote reads a refresh depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteCall {
    StakedTokenSupply,
    RewardPerBlock,
    UsdPrice,
}

impl RemoteCall {
    pub fn label(&self) -> &'static str {
        match self {
            RemoteCall::StakedTokenSupply => "stakedTokenSupply",
            RemoteCall::RewardPerBlock => "rewardPerBlock",
            RemoteCall::UsdPrice => "usdPrice",
        }
    }
}

impl fmt::Display for RemoteCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("contract read failed: {0}")]
    ContractRead(#[from] ContractError),

    #[error("price read failed: {0}")]
    PriceRead(#[from] PriceFeedError),

    #[error("{call} timed out after {timeout:?}")]
    Timeout { call: RemoteCall, timeout: Duration },

    /// The feed answered but had no usable price. Not a transport failure.
    #[error("no usd price available for {0}")]
    PriceUnavailable(String),

    #[error("unit conversion failed: {0}")]
    Conversion(#[from] UnitsError),
}

impl PipelineError {
    /// True for failures of a remote read (including timeouts).
    pub fn is_remote_failure(&self) -> bool {
        matches!(
            self,
            PipelineError::ContractRead(_)
                | PipelineError::PriceRead(_)
                | PipelineError::Timeout { .. }
        )
    }
}
