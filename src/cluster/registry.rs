//! Member registry.
//!
//! # Responsibilities
//! - Build members from the shared settings and a per-server producer
//! - Keep members in insertion order (order drives rotation and tie-breaks)
//!
//! # Design Decisions
//! - Append-only: members are never removed or reordered
//! - Producers are not inspected; a bad producer fails on first acquire

use std::sync::Arc;

use crate::cluster::handle::MemberHandle;
use crate::config::PoolSettings;
use crate::member::MemberPool;

/// Ordered, append-only collection of member pools.
#[derive(Debug)]
pub struct PoolRegistry<P> {
    settings: PoolSettings,
    members: Vec<Arc<P>>,
}

impl<P: MemberPool> PoolRegistry<P> {
    /// Create an empty registry whose members share `settings`.
    pub fn new(settings: PoolSettings) -> Self {
        Self {
            settings,
            members: Vec::new(),
        }
    }

    /// Settings template copied into every member.
    pub fn settings(&self) -> &PoolSettings {
        &self.settings
    }

    /// Construct a member for `producer` and append it.
    pub fn add(&mut self, producer: P::Producer) -> MemberHandle<P> {
        let pool = Arc::new(P::construct(self.settings.with_producer(producer)));
        let index = self.members.len();
        self.members.push(Arc::clone(&pool));
        MemberHandle::new(index, pool)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[Arc<P>] {
        &self.members
    }

    /// Handle for the member at `index`.
    pub fn get(&self, index: usize) -> Option<MemberHandle<P>> {
        self.members
            .get(index)
            .map(|pool| MemberHandle::new(index, Arc::clone(pool)))
    }

    /// Handles for every member, in order.
    pub fn handles(&self) -> Vec<MemberHandle<P>> {
        self.members
            .iter()
            .enumerate()
            .map(|(index, pool)| MemberHandle::new(index, Arc::clone(pool)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.members.iter().map(Arc::as_ref)
    }
}
