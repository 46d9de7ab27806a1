//! Group model.

use serde::{Deserialize, Serialize};

use grantmap_core::{GroupId, RoleId};

/// A group node in a single-inheritance hierarchy.
///
/// The parent is a back-reference by id (relation lookup), never an owning
/// pointer. A group's full hierarchical path is derived at mapping time, not
/// stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    /// Parent group, absent for hierarchy roots.
    pub parent: Option<GroupId>,
    /// Directly-assigned roles, unordered.
    pub roles: Vec<RoleId>,
}

impl Group {
    /// A root group (no parent).
    pub fn root(id: GroupId, name: impl Into<String>, roles: Vec<RoleId>) -> Self {
        Self {
            id,
            name: name.into(),
            parent: None,
            roles,
        }
    }

    /// A child group under the given parent.
    pub fn child(
        id: GroupId,
        name: impl Into<String>,
        parent: GroupId,
        roles: Vec<RoleId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            parent: Some(parent),
            roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_group_has_no_parent() {
        let group = Group::root(GroupId::new(), "engineering", vec![]);
        assert!(group.parent.is_none());
    }

    #[test]
    fn child_group_references_parent_by_id() {
        let parent = GroupId::new();
        let group = Group::child(GroupId::new(), "backend", parent, vec![]);
        assert_eq!(group.parent, Some(parent));
    }
}
