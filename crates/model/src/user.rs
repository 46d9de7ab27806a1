//! User and session models.

use serde::{Deserialize, Serialize};

use grantmap_core::{GroupId, UserId};

/// A user with group memberships.
///
/// Memberships are unordered and reference groups by id; the user object is
/// supplied by the identity store and treated as read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub groups: Vec<GroupId>,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, groups: Vec<GroupId>) -> Self {
        Self {
            id,
            username: username.into(),
            groups,
        }
    }
}

/// The user-session collaborator: whatever request context the host platform
/// carries, reduced to the one thing the mapper needs. A session without a
/// user is valid (e.g. client-credentials flows) and yields an empty claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<UserId>,
}

impl Session {
    pub fn for_user(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_has_no_user() {
        assert!(Session::anonymous().user.is_none());
        assert_eq!(Session::default(), Session::anonymous());
    }
}
