//! Metrics collection and exposition.
//!
//! # Metrics
//! - `pool_cluster_selections_total` (counter): selections by cluster, strategy
//! - `pool_cluster_acquire_errors_total` (counter): failed acquires by cluster, kind
//! - `pool_cluster_members` (gauge): member count per cluster

use std::net::SocketAddr;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::cluster::SelectionStrategy;

/// Install the Prometheus exporter with an HTTP listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_selection(cluster: &str, strategy: SelectionStrategy) {
    counter!(
        "pool_cluster_selections_total",
        "cluster" => cluster.to_string(),
        "strategy" => strategy.as_str()
    )
    .increment(1);
}

pub fn record_acquire_error(cluster: &str, kind: &'static str) {
    counter!(
        "pool_cluster_acquire_errors_total",
        "cluster" => cluster.to_string(),
        "kind" => kind
    )
    .increment(1);
}

pub fn record_cluster_size(cluster: &str, size: usize) {
    gauge!("pool_cluster_members", "cluster" => cluster.to_string()).set(size as f64);
}
