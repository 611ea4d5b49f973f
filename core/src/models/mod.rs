pub mod metric;
pub mod snapshot;

pub use metric::{Metric, MetricIcon, MetricKind, MetricsResult};
pub use snapshot::{ContractSnapshot, PriceQuote};
