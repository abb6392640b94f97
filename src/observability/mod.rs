//! Observability for the hero service
//!
//! Logging goes through `tracing`; this module only installs the
//! subscriber. Request-level spans come from `tower-http`'s `TraceLayer`.

mod logging;

pub use logging::{build_filter, init_logging, LogConfig, LogInitError};
