//! Cluster subsystem.
//!
//! # Data Flow
//! ```text
//! ClusterPool::acquire(priority)
//!     → pool.rs (lock cluster state)
//!     → selector.rs (scan waiting counts from the cursor):
//!         - first member with an empty queue wins (round robin among idle)
//!         - otherwise the member with the fewest waiters, lowest index on ties
//!     → cursor = selected + 1 (mod member count)
//!     → unlock, delegate to the member pool's own acquire
//!     → (resource, MemberHandle) or the member's error, unchanged
//! ```
//!
//! # Design Decisions
//! - Cursor is per cluster; clusters share nothing
//! - Selection is synchronous and runs under one lock, so concurrent acquires
//!   never observe a half-advanced cursor
//! - Member counts belong to the member pools; the cluster only reads them,
//!   so a decision may act on slightly stale counts
//! - No failover: a failing member's error goes straight back to the caller

pub mod error;
pub mod handle;
pub mod pool;
pub mod registry;
pub mod selector;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ClusterError;
pub use handle::{Lease, MemberHandle};
pub use pool::{Acquired, ClusterPool};
pub use registry::PoolRegistry;
pub use selector::{Selection, SelectionStrategy, Selector};
pub use stats::ClusterStats;
