//! Cluster error definitions.

use thiserror::Error;

/// Errors returned by cluster acquisition.
#[derive(Debug, Error)]
pub enum ClusterError<E> {
    /// Acquire was attempted before any member was added.
    #[error("cluster `{cluster}` has no members")]
    NoMembers { cluster: String },

    /// Error reported by the selected member pool, kept unchanged as the source.
    #[error("member {member} failed: {source}")]
    Member {
        /// Index of the member the acquire was routed to.
        member: usize,
        #[source]
        source: E,
    },
}

impl<E> ClusterError<E> {
    pub fn is_no_members(&self) -> bool {
        matches!(self, ClusterError::NoMembers { .. })
    }

    /// Index of the member that failed, if a member was selected.
    pub fn member_index(&self) -> Option<usize> {
        match self {
            ClusterError::Member { member, .. } => Some(*member),
            ClusterError::NoMembers { .. } => None,
        }
    }

    /// The member pool's own error, if that is where the failure came from.
    pub fn member_error(&self) -> Option<&E> {
        match self {
            ClusterError::Member { source, .. } => Some(source),
            ClusterError::NoMembers { .. } => None,
        }
    }

    pub fn into_member_error(self) -> Option<E> {
        match self {
            ClusterError::Member { source, .. } => Some(source),
            ClusterError::NoMembers { .. } => None,
        }
    }
}
