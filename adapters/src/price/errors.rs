use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceFeedError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response from price feed: {0}")]
    InvalidResponse(String),
}
