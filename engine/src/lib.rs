pub mod calc;
pub mod error;
pub mod pipeline;
pub mod refresh;

pub use calc::{Apr, derive_metrics};
pub use error::{PipelineError, RemoteCall};
pub use pipeline::{MetricsPipeline, compute_metrics, fetch_inputs, try_compute_metrics};
pub use refresh::{MetricsSink, run_refresh_loop};
