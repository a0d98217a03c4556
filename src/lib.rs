//! Load-balanced cluster of per-server resource pools.
//!
//! One member pool per backend server (e.g. read replicas), one acquire
//! entry point that picks which member serves each request.
//!
//! ```text
//!   ClusterPool::acquire ──▶ Selector ──▶ MemberPool::acquire ──▶ (resource, MemberHandle)
//!          │                    │
//!          │             reads waiting counts
//!          ▼
//!   PoolRegistry [member 0, member 1, ...]   ◀── ClusterPool::add(producer)
//! ```

pub mod cluster;
pub mod config;
pub mod member;
pub mod observability;

pub use cluster::{ClusterError, ClusterPool, ClusterStats, Lease, MemberHandle};
pub use config::{ClusterConfig, PoolSettings};
pub use member::{MemberConfig, MemberPool, Priority, Produce};
