use tracing::{Span, field};

use super::TraceId;

/// Create a root span for one refresh of the metrics pipeline.
pub fn root_span(name: &'static str, trace_id: &TraceId) -> Span {
    tracing::info_span!(
        "root",
        name = %name,
        trace_id = %trace_id,
        asset_id = field::Empty
    )
}

