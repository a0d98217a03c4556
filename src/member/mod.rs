//! Member pool capability.
//!
//! # Responsibilities
//! - Describe what the cluster needs from a per-server pool
//! - Carry the per-server configuration (shared settings + producer)
//! - Model the opaque asynchronous resource producer
//!
//! # Design Decisions
//! - The cluster never creates, validates or destroys resources itself
//! - Counts are owned by the member pool; the cluster only reads them
//! - A pending acquire is a future that resolves exactly once

use std::future::Future;

use crate::config::PoolSettings;

/// Request priority, passed through to the member pool unmodified.
///
/// Range and meaning are defined by the member pool implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub u32);

impl From<u32> for Priority {
    fn from(level: u32) -> Self {
        Self(level)
    }
}

impl From<Priority> for u32 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

/// Asynchronous producer of new resources for one backend server
/// (e.g. opening a connection).
pub trait Produce: Send + Sync + 'static {
    type Resource: Send + 'static;
    type Error: Send + 'static;

    /// Produce one resource. Resolves exactly once.
    fn produce(&self) -> impl Future<Output = Result<Self::Resource, Self::Error>> + Send;
}

impl<F, Fut, R, E> Produce for F
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send,
    R: Send + 'static,
    E: Send + 'static,
{
    type Resource = R;
    type Error = E;

    fn produce(&self) -> impl Future<Output = Result<R, E>> + Send {
        self()
    }
}

/// Configuration for a single member: the cluster-wide settings with the
/// server-specific producer installed.
#[derive(Debug, Clone)]
pub struct MemberConfig<F> {
    /// Settings shared by every member of the cluster.
    pub settings: PoolSettings,
    /// Producer for this member's backend server.
    pub producer: F,
}

impl<F> MemberConfig<F> {
    /// Copy every shared setting and install `producer`.
    pub fn new(settings: &PoolSettings, producer: F) -> Self {
        Self {
            settings: settings.clone(),
            producer,
        }
    }
}

/// A per-server resource pool that can join a cluster.
///
/// Implementations own resource lifecycle, sizing, queueing and validation.
pub trait MemberPool: Send + Sync + Sized + 'static {
    /// Resource handed out by the pool (e.g. a connection).
    type Resource: Send + 'static;
    /// Error reported by `acquire`, including producer failures.
    type Error: std::error::Error + Send + Sync + 'static;
    /// Server-specific producer used to construct the pool.
    type Producer: Send + 'static;

    /// Build a pool from merged member configuration.
    fn construct(config: MemberConfig<Self::Producer>) -> Self;

    /// Acquire a resource. May wait according to the pool's own queueing.
    fn acquire(
        &self,
        priority: Option<Priority>,
    ) -> impl Future<Output = Result<Self::Resource, Self::Error>> + Send;

    /// Return a resource obtained from this pool.
    fn release(&self, resource: Self::Resource);

    /// Number of acquire requests queued and not yet served.
    fn waiting_count(&self) -> usize;

    /// Number of resources currently instantiated (in use + idle).
    fn launched_count(&self) -> usize;

    /// Number of idle resources ready for immediate reuse.
    fn available_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_closure_producer() {
        let producer = || async { Ok::<_, std::io::Error>(7u32) };
        assert_eq!(producer.produce().await.unwrap(), 7);
    }

    #[test]
    fn test_member_config_copies_settings() {
        let settings = PoolSettings {
            name: "replicas".into(),
            max_size: 4,
            ..PoolSettings::default()
        };
        let config = MemberConfig::new(&settings, "db-2:5432");

        assert_eq!(config.settings.name, "replicas");
        assert_eq!(config.settings.max_size, 4);
        assert_eq!(config.producer, "db-2:5432");
    }
}
