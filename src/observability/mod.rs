//! Observability for the string service
//!
//! - Structured logging through `tracing`
//! - Monotonic operational counters
//!
//! Observability is read-only: nothing here changes what an operation returns.

mod logging;
mod metrics;

pub use logging::{build_filter, init_logging, LogFormat, LoggingError};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
