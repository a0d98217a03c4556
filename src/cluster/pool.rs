//! Cluster pool facade.
//!
//! # Responsibilities
//! - Own the member registry and the rotation cursor of one cluster
//! - Select a member per acquire and delegate to it
//! - Report cluster-wide statistics

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::cluster::error::ClusterError;
use crate::cluster::handle::{Lease, MemberHandle};
use crate::cluster::registry::PoolRegistry;
use crate::cluster::selector::Selector;
use crate::cluster::stats::{self, ClusterStats};
use crate::config::{ClusterConfig, PoolSettings};
use crate::member::{MemberPool, Priority};
use crate::observability::metrics;

/// Outcome of a cluster acquire: the resource and the member it must go back to.
pub type Acquired<P> = (<P as MemberPool>::Resource, MemberHandle<P>);

struct ClusterState<P> {
    registry: PoolRegistry<P>,
    selector: Selector,
}

/// A cluster of per-server pools behind one acquire entry point.
///
/// Each cluster is independent; two clusters never share members or cursor.
pub struct ClusterPool<P> {
    name: String,
    // Never held across an await.
    state: Mutex<ClusterState<P>>,
}

impl<P: MemberPool> ClusterPool<P> {
    /// Create an empty cluster whose members share `settings`.
    pub fn new(settings: PoolSettings) -> Self {
        let name = settings.name.clone();
        tracing::debug!(cluster = %name, "Cluster created");

        Self {
            name,
            state: Mutex::new(ClusterState {
                registry: PoolRegistry::new(settings),
                selector: Selector::new(),
            }),
        }
    }

    /// Create an empty cluster from loaded configuration.
    pub fn from_config(config: &ClusterConfig) -> Self {
        Self::new(config.pool.clone())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn lock(&self) -> MutexGuard<'_, ClusterState<P>> {
        // Selection never panics midway, so the state is consistent even if poisoned.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a member for one backend server.
    pub fn add(&self, producer: P::Producer) -> MemberHandle<P> {
        let (handle, size) = {
            let mut state = self.lock();
            let handle = state.registry.add(producer);
            (handle, state.registry.len())
        };

        metrics::record_cluster_size(&self.name, size);
        tracing::info!(
            cluster = %self.name,
            member = handle.index(),
            cluster_size = size,
            "Member added"
        );
        handle
    }

    /// Choose the member for the next acquire and advance the cursor.
    fn select(&self) -> Result<MemberHandle<P>, ClusterError<P::Error>> {
        let mut state = self.lock();
        let ClusterState { registry, selector } = &mut *state;

        let Some(selection) = selector.select(registry.members(), |m| m.waiting_count()) else {
            tracing::warn!(cluster = %self.name, "Acquire attempted on a cluster with no members");
            metrics::record_acquire_error(&self.name, "no_members");
            return Err(ClusterError::NoMembers {
                cluster: self.name.clone(),
            });
        };

        tracing::debug!(
            cluster = %self.name,
            member = selection.index,
            strategy = selection.strategy.as_str(),
            cursor = selector.cursor(),
            "Member selected"
        );
        metrics::record_selection(&self.name, selection.strategy);

        let pool = Arc::clone(&registry.members()[selection.index]);
        Ok(MemberHandle::new(selection.index, pool))
    }

    /// Acquire a resource from the member chosen by the selector.
    ///
    /// The resource must be released to the returned handle.
    /// Member pool errors are returned unchanged as the source of
    /// [`ClusterError::Member`], together with the index of the failing member.
    pub async fn acquire(
        &self,
        priority: Option<Priority>,
    ) -> Result<Acquired<P>, ClusterError<P::Error>> {
        let member = self.select()?;
        self.delegate(member, priority).await
    }

    async fn delegate(
        &self,
        member: MemberHandle<P>,
        priority: Option<Priority>,
    ) -> Result<Acquired<P>, ClusterError<P::Error>> {
        match member.pool().acquire(priority).await {
            Ok(resource) => Ok((resource, member)),
            Err(source) => {
                tracing::debug!(
                    cluster = %self.name,
                    member = member.index(),
                    error = %source,
                    "Member acquire failed"
                );
                metrics::record_acquire_error(&self.name, "member");
                Err(ClusterError::Member {
                    member: member.index(),
                    source,
                })
            }
        }
    }

    /// Acquire a resource wrapped in a guard that releases it on drop.
    pub async fn lease(&self, priority: Option<Priority>) -> Result<Lease<P>, ClusterError<P::Error>> {
        let (resource, member) = self.acquire(priority).await?;
        Ok(Lease::new(resource, member))
    }

    /// Route an acquire now and complete it on the tokio runtime.
    ///
    /// The member is selected before this returns, so calls are routed in the
    /// order they are made. `on_complete` runs exactly once on the spawned task
    /// with the outcome, including the no-members error.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime. The cursor is not advanced in that case.
    pub fn acquire_with<F>(self: &Arc<Self>, priority: Option<Priority>, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Acquired<P>, ClusterError<P::Error>>) + Send + 'static,
    {
        let runtime = Handle::current();
        let selected = self.select();
        let cluster = Arc::clone(self);

        runtime.spawn(async move {
            let outcome = match selected {
                Ok(member) => cluster.delegate(member, priority).await,
                Err(e) => Err(e),
            };
            on_complete(outcome);
        })
    }

    /// Number of members.
    pub fn cluster_size(&self) -> usize {
        self.lock().registry.len()
    }

    pub fn total_launched(&self) -> usize {
        stats::total_launched(self.lock().registry.iter())
    }

    pub fn total_available(&self) -> usize {
        stats::total_available(self.lock().registry.iter())
    }

    pub fn total_waiting(&self) -> usize {
        stats::total_waiting(self.lock().registry.iter())
    }

    /// All aggregate counts in one pass.
    pub fn stats(&self) -> ClusterStats {
        ClusterStats::collect(&self.lock().registry)
    }

    /// Handles for every member, in insertion order.
    pub fn members(&self) -> Vec<MemberHandle<P>> {
        self.lock().registry.handles()
    }

    /// Settings copied into each new member.
    pub fn settings(&self) -> PoolSettings {
        self.lock().registry.settings().clone()
    }
}

impl<P> std::fmt::Debug for ClusterPool<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterPool").field("name", &self.name).finish_non_exhaustive()
    }
}
