use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("invalid contract address {0:?}")]
    InvalidAddress(String),

    #[error("invalid rpc url: {0}")]
    InvalidRpcUrl(String),

    #[error("{method} call failed: {reason}")]
    Call { method: &'static str, reason: String },
}
