//! Mapper error taxonomy.

use thiserror::Error;

use grantmap_core::{GroupId, RoleId};

/// Failure raised while building or writing the group-roles claim.
///
/// Only [`MapperError::MissingToken`] is a caller precondition; the cyclic
/// and unknown-reference variants indicate a malformed identity snapshot.
/// Absent sessions, users or groups are not errors and degrade to an empty
/// claim instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapperError {
    /// No token object was supplied to receive the claim.
    #[error("no token to update")]
    MissingToken,

    /// A composite role expansion revisited a role already being expanded.
    #[error("cyclic composite-role graph at role '{0}'")]
    CyclicRoleGraph(String),

    /// A group parent chain revisited a group already on the chain.
    #[error("cyclic group parent chain at group '{0}'")]
    CyclicGroupChain(String),

    /// A role reference did not resolve in the directory snapshot.
    #[error("unknown role reference: {0}")]
    UnknownRole(RoleId),

    /// A group reference did not resolve in the directory snapshot.
    #[error("unknown group reference: {0}")]
    UnknownGroup(GroupId),
}
