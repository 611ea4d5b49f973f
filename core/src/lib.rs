pub mod config;
pub mod models;
pub mod units;

pub use models::*;
pub use units::{TokenAmount, UnitsError, format_fixed};

/// 256-bit unsigned integer as returned by EVM view functions.
pub use ethers::types::U256;
