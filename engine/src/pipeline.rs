//! Metrics pipeline
//!
//! Fans out the two contract reads and the price read, waits for all of
//! them (or the first failure), then derives the dashboard metrics.
//!
//! Data flow:
//! ContractReader + PriceFeed → (ContractSnapshot, PriceQuote) → MetricsResult

use std::future::Future;
use std::sync::Arc;

use adapters::{ContractReader, PriceFeed};
use common::logger::{TraceId, root_span, warn_if_slow};
use corelib::config::PipelineConfig;
use corelib::{ContractSnapshot, MetricsResult, PriceQuote};
use tracing::{Instrument, Span, debug, error, info, instrument, warn};

use crate::calc::derive_metrics;
use crate::error::{PipelineError, RemoteCall};

/// Run one remote read under the configured timeout.
async fn bounded<T, E, F>(call: RemoteCall, cfg: &PipelineConfig, fut: F) -> Result<T, PipelineError>
where
    F: Future<Output = Result<T, E>>,
    PipelineError: From<E>,
{
    let fut = warn_if_slow(call.label(), cfg.slow_call_threshold, fut);

    match tokio::time::timeout(cfg.request_timeout, fut).await {
        Ok(res) => res.map_err(PipelineError::from),
        Err(_) => Err(PipelineError::Timeout {
            call,
            timeout: cfg.request_timeout,
        }),
    }
}

/// Issue all three reads concurrently. The first failure wins.
pub async fn fetch_inputs<C, P>(
    contract: &C,
    price: &P,
    cfg: &PipelineConfig,
) -> Result<(ContractSnapshot, Option<PriceQuote>), PipelineError>
where
    C: ContractReader + ?Sized,
    P: PriceFeed + ?Sized,
{
    let (staked_token_supply, reward_per_block, usd) = tokio::try_join!(
        bounded(
            RemoteCall::StakedTokenSupply,
            cfg,
            contract.staked_token_supply()
        ),
        bounded(RemoteCall::RewardPerBlock, cfg, contract.reward_per_block()),
        bounded(
            RemoteCall::UsdPrice,
            cfg,
            price.usd_price(&cfg.price_asset_id)
        ),
    )?;

    let snapshot = ContractSnapshot {
        staked_token_supply,
        reward_per_block,
    };

    Ok((
        snapshot,
        PriceQuote::from_feed(cfg.price_asset_id.as_str(), usd),
    ))
}

/// Fetch and derive, surfacing the reason when no metrics can be produced.
#[instrument(skip_all)]
pub async fn try_compute_metrics<C, P>(
    contract: &C,
    price: &P,
    cfg: &PipelineConfig,
) -> Result<MetricsResult, PipelineError>
where
    C: ContractReader + ?Sized,
    P: PriceFeed + ?Sized,
{
    let (snapshot, quote) = fetch_inputs(contract, price, cfg).await?;
    debug!(priced = quote.is_some(), "contract snapshot fetched");

    let quote = quote.ok_or_else(|| PipelineError::PriceUnavailable(cfg.price_asset_id.clone()))?;

    Ok(derive_metrics(&snapshot, &quote, cfg)?)
}

/// All-or-nothing form for presentation layers: any failure is logged
/// and turned into an empty result.
pub async fn compute_metrics<C, P>(contract: &C, price: &P, cfg: &PipelineConfig) -> MetricsResult
where
    C: ContractReader + ?Sized,
    P: PriceFeed + ?Sized,
{
    match try_compute_metrics(contract, price, cfg).await {
        Ok(result) => {
            info!(metrics = result.len(), "metrics computed");
            result
        }
        Err(PipelineError::PriceUnavailable(asset_id)) => {
            warn!(asset_id = %asset_id, "no price available; metrics withheld");
            MetricsResult::empty()
        }
        Err(e) => {
            error!(error = %e, remote = e.is_remote_failure(), "metrics refresh failed");
            MetricsResult::empty()
        }
    }
}

/// Owns the injected clients and settings; each refresh is independent.
#[derive(Clone)]
pub struct MetricsPipeline {
    contract: Arc<dyn ContractReader>,
    price: Arc<dyn PriceFeed>,
    cfg: PipelineConfig,
}

impl MetricsPipeline {
    pub fn new(
        contract: Arc<dyn ContractReader>,
        price: Arc<dyn PriceFeed>,
        cfg: PipelineConfig,
    ) -> Self {
        Self {
            contract,
            price,
            cfg,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.cfg
    }

    fn span(&self) -> Span {
        let span = root_span("metrics_refresh", &TraceId::new());
        span.record("asset_id", self.cfg.price_asset_id.as_str());
        span
    }

    pub async fn refresh(&self) -> MetricsResult {
        compute_metrics(self.contract.as_ref(), self.price.as_ref(), &self.cfg)
            .instrument(self.span())
            .await
    }

    pub async fn try_refresh(&self) -> Result<MetricsResult, PipelineError> {
        try_compute_metrics(self.contract.as_ref(), self.price.as_ref(), &self.cfg)
            .instrument(self.span())
            .await
    }
}
