use std::future::Future;
use std::time::Duration;

use corelib::MetricsResult;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::pipeline::MetricsPipeline;

/// Consumer of refreshed metrics (a screen, a terminal, a test recorder).
pub trait MetricsSink: Send {
    fn publish(&mut self, result: &MetricsResult);
}

/// Refresh every `every` until `shutdown` resolves.
///
/// The first refresh happens immediately. A slow refresh skips missed ticks
/// instead of bursting to catch up.
pub async fn run_refresh_loop<S, F>(
    pipeline: &MetricsPipeline,
    every: Duration,
    sink: &mut S,
    shutdown: F,
) -> u64
where
    S: MetricsSink + ?Sized,
    F: Future<Output = ()>,
{
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    info!(
        asset_id = %pipeline.config().price_asset_id,
        every_ms = every.as_millis() as u64,
        "metrics refresh loop started"
    );

    let mut runs = 0u64;
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => {
                let result = pipeline.refresh().await;
                sink.publish(&result);
                runs += 1;
            }
        }
    }

    info!(runs, "metrics refresh loop stopped");
    runs
}
