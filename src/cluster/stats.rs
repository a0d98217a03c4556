//! Cluster-wide statistics.
//!
//! Point-in-time sums over the member pools' own counts. Nothing is cached;
//! every call reads each member once.

use serde::Serialize;

use crate::cluster::registry::PoolRegistry;
use crate::member::MemberPool;

/// Resources instantiated across `members` (in use + idle).
pub fn total_launched<'a, P: MemberPool>(members: impl IntoIterator<Item = &'a P>) -> usize {
    members.into_iter().map(|m| m.launched_count()).sum()
}

/// Idle resources ready for reuse across `members`.
pub fn total_available<'a, P: MemberPool>(members: impl IntoIterator<Item = &'a P>) -> usize {
    members.into_iter().map(|m| m.available_count()).sum()
}

/// Pending acquire requests across `members`.
pub fn total_waiting<'a, P: MemberPool>(members: impl IntoIterator<Item = &'a P>) -> usize {
    members.into_iter().map(|m| m.waiting_count()).sum()
}

/// Snapshot of a cluster's aggregate counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClusterStats {
    pub size: usize,
    pub launched: usize,
    pub available: usize,
    pub waiting: usize,
}

impl ClusterStats {
    pub fn collect<P: MemberPool>(registry: &PoolRegistry<P>) -> Self {
        Self {
            size: registry.len(),
            launched: total_launched(registry.iter()),
            available: total_available(registry.iter()),
            waiting: total_waiting(registry.iter()),
        }
    }
}
