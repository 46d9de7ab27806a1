//! Role model.

use serde::{Deserialize, Serialize};

use grantmap_core::RoleId;

/// A role as exposed by the role store.
///
/// Roles are either *leaf* roles (no constituents) or *composite* roles that
/// transitively grant their constituent roles. Constituents are referenced by
/// id, never owned: the same role may be a constituent of many composites and
/// directly assigned to many groups.
///
/// The constituent graph is assumed acyclic; the mapper detects violations of
/// that assumption during expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    /// Constituent roles, in stored order. Empty for leaf roles.
    pub composites: Vec<RoleId>,
}

impl Role {
    /// A leaf role with no constituents.
    pub fn leaf(id: RoleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            composites: Vec::new(),
        }
    }

    /// A composite role granting the given constituents.
    pub fn composite(id: RoleId, name: impl Into<String>, composites: Vec<RoleId>) -> Self {
        Self {
            id,
            name: name.into(),
            composites,
        }
    }

    /// Whether this role grants other roles transitively.
    pub fn is_composite(&self) -> bool {
        !self.composites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_role_is_not_composite() {
        let role = Role::leaf(RoleId::new(), "viewer");
        assert!(!role.is_composite());
        assert_eq!(role.name, "viewer");
    }

    #[test]
    fn composite_role_reports_composite() {
        let constituent = RoleId::new();
        let role = Role::composite(RoleId::new(), "admin", vec![constituent]);
        assert!(role.is_composite());
        assert_eq!(role.composites, vec![constituent]);
    }
}
