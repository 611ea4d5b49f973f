mod init;
mod macros;
mod slow;
mod trace_id;

pub use init::{LogFormat, init_logger};
pub use macros::root_span;
pub use slow::warn_if_slow;
pub use trace_id::TraceId;
