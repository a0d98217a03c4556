//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::member::MemberConfig;

/// Root configuration for a pool cluster.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ClusterConfig {
    /// Settings shared by every member pool.
    pub pool: PoolSettings,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Settings template copied into every member pool.
///
/// The cluster itself only reads `name`; everything else is interpreted
/// by the member pool implementation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PoolSettings {
    /// Cluster identifier for logging/metrics.
    pub name: String,

    /// Maximum resources per member.
    pub max_size: usize,

    /// Minimum resources a member keeps launched.
    pub min_size: usize,

    /// Idle resource timeout in seconds.
    pub idle_timeout_secs: u64,

    /// Interval between idle reaping passes in seconds.
    pub reap_interval_secs: u64,

    /// Number of priority levels the member queue distinguishes.
    pub priority_levels: u32,

    /// Optional per-acquire timeout in milliseconds.
    pub acquire_timeout_ms: Option<u64>,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            max_size: 10,
            min_size: 0,
            idle_timeout_secs: 30,
            reap_interval_secs: 1,
            priority_levels: 1,
            acquire_timeout_ms: None,
        }
    }
}

impl PoolSettings {
    /// Copy these settings and install a server-specific producer.
    pub fn with_producer<F>(&self, producer: F) -> MemberConfig<F> {
        MemberConfig::new(self, producer)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus exporter.
    pub metrics_enabled: bool,

    /// Exporter bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
