pub mod cli;
pub mod render;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use adapters::{CoinGeckoClient, SmartChefReader};
use cli::Cli;
use common::logger::{LogFormat, init_logger};
use corelib::config::AppConfig;
use engine::{MetricsPipeline, MetricsSink, run_refresh_loop};

/// Construct the remote clients once and hand them to the pipeline.
fn build_pipeline(cfg: &AppConfig) -> anyhow::Result<MetricsPipeline> {
    let contract = SmartChefReader::new(&cfg.rpc_url, &cfg.contract_address)
        .context("failed to build staking contract reader")?;

    let price = CoinGeckoClient::new(
        cfg.price_api_url.clone(),
        cfg.price_api_key.clone(),
        cfg.request_timeout,
    )
    .context("failed to build price feed client")?;

    Ok(MetricsPipeline::new(
        Arc::new(contract),
        Arc::new(price),
        cfg.pipeline(),
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("stakeboard", LogFormat::from_env());

    let args = Cli::parse();
    let cfg = args
        .apply(AppConfig::from_env().context("invalid environment configuration")?)
        .context("invalid command line configuration")?;

    tracing::info!(
        rpc_url = %cfg.rpc_url,
        contract = %cfg.contract_address,
        asset_id = %cfg.price_asset_id,
        "Starting stakeboard..."
    );

    let pipeline = build_pipeline(&cfg)?;
    let mut sink = render::sink_for(args.output);

    match args.watch_interval() {
        Some(every) => {
            run_refresh_loop(&pipeline, every, sink.as_mut(), shutdown_signal()).await;
        }
        None if args.strict => {
            let result = pipeline
                .try_refresh()
                .await
                .context("metrics unavailable")?;
            sink.publish(&result);
        }
        None => {
            let result = pipeline.refresh().await;
            sink.publish(&result);
        }
    }

    Ok(())
}
