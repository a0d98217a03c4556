//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (sizes, priority levels)
//! - Check the metrics address when the exporter is enabled
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClusterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ClusterConfig;

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("pool name must not be empty")]
    EmptyName,

    #[error("max_size must be at least 1")]
    ZeroMaxSize,

    #[error("min_size {min} exceeds max_size {max}")]
    MinExceedsMax { min: usize, max: usize },

    #[error("priority_levels must be at least 1")]
    ZeroPriorityLevels,

    #[error("invalid metrics address: {0}")]
    MetricsAddress(String),
}

/// Check a parsed configuration.
pub fn validate_config(config: &ClusterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let pool = &config.pool;

    if pool.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }
    if pool.max_size == 0 {
        errors.push(ValidationError::ZeroMaxSize);
    } else if pool.min_size > pool.max_size {
        errors.push(ValidationError::MinExceedsMax {
            min: pool.min_size,
            max: pool.max_size,
        });
    }
    if pool.priority_levels == 0 {
        errors.push(ValidationError::ZeroPriorityLevels);
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
