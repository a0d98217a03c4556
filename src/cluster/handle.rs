//! Member handles and leases.
//!
//! # Responsibilities
//! - Identify the member a resource was acquired from
//! - Route releases back to that member
//! - Release automatically when a lease is dropped

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::member::MemberPool;

/// Handle to one member pool of a cluster.
///
/// Resources acquired through the cluster must be released to the handle
/// returned alongside them.
pub struct MemberHandle<P> {
    index: usize,
    pool: Arc<P>,
}

impl<P: MemberPool> MemberHandle<P> {
    pub(crate) fn new(index: usize, pool: Arc<P>) -> Self {
        Self { index, pool }
    }

    /// Position of the member in its cluster.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The underlying member pool.
    pub fn pool(&self) -> &P {
        &self.pool
    }

    /// Return a resource to this member.
    pub fn release(&self, resource: P::Resource) {
        self.pool.release(resource);
    }

    pub fn waiting_count(&self) -> usize {
        self.pool.waiting_count()
    }

    pub fn launched_count(&self) -> usize {
        self.pool.launched_count()
    }

    pub fn available_count(&self) -> usize {
        self.pool.available_count()
    }
}

impl<P> Clone for MemberHandle<P> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            pool: Arc::clone(&self.pool),
        }
    }
}

impl<P> PartialEq for MemberHandle<P> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pool, &other.pool)
    }
}

impl<P> Eq for MemberHandle<P> {}

impl<P> fmt::Debug for MemberHandle<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberHandle").field("index", &self.index).finish()
    }
}

/// A RAII guard that releases its resource to the originating member on drop.
pub struct Lease<P: MemberPool> {
    // Some until dropped or detached.
    resource: Option<P::Resource>,
    member: MemberHandle<P>,
}

impl<P: MemberPool> Lease<P> {
    pub fn new(resource: P::Resource, member: MemberHandle<P>) -> Self {
        Self {
            resource: Some(resource),
            member,
        }
    }

    /// Member the resource belongs to.
    pub fn member(&self) -> &MemberHandle<P> {
        &self.member
    }

    /// Take the resource out without releasing it.
    /// The caller becomes responsible for releasing it to the returned handle.
    pub fn detach(mut self) -> (P::Resource, MemberHandle<P>) {
        let resource = Self::present(self.resource.take());
        (resource, self.member.clone())
    }

    // `resource` is only emptied by `detach` (which consumes the lease) and `drop`.
    fn present<T>(resource: Option<T>) -> T {
        resource.expect("lease resource present until drop")
    }
}

impl<P: MemberPool> Deref for Lease<P> {
    type Target = P::Resource;

    fn deref(&self) -> &Self::Target {
        Self::present(self.resource.as_ref())
    }
}

impl<P: MemberPool> DerefMut for Lease<P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        Self::present(self.resource.as_mut())
    }
}

impl<P: MemberPool> Drop for Lease<P> {
    fn drop(&mut self) {
        if let Some(resource) = self.resource.take() {
            self.member.release(resource);
        }
    }
}

impl<P: MemberPool> fmt::Debug for Lease<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lease").field("member", &self.member.index).finish()
    }
}
