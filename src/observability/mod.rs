//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Cluster operations produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (selection counters, error counters, member gauges)
//!
//! Consumers:
//!     → Log output (stdout, filtered by RUST_LOG or config)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Library code only emits; installing subscribers/exporters is the application's call
//! - Metrics are cheap (no-ops until a recorder is installed)

pub mod logging;
pub mod metrics;

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

use crate::config::ObservabilityConfig;

/// Errors from installing logging or the metrics exporter.
#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("invalid metrics address: {0}")]
    MetricsAddress(#[from] AddrParseError),

    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("failed to install metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Install the log subscriber and, if enabled, the Prometheus exporter.
pub fn init(config: &ObservabilityConfig) -> Result<(), ObservabilityError> {
    let metrics_addr: Option<SocketAddr> = if config.metrics_enabled {
        Some(config.metrics_address.parse()?)
    } else {
        None
    };

    logging::init(&config.log_level)?;

    if let Some(addr) = metrics_addr {
        metrics::init_metrics(addr)?;
    }
    Ok(())
}
