//! Request-scoped identity snapshot.

use std::collections::HashMap;

use grantmap_core::{DomainError, DomainResult, GroupId, RoleId, UserId};

use crate::{Group, Role, User};

/// Read-only snapshot of the identity graph for one token-issuance request.
///
/// All cross-entity references are by typed id and resolved through this
/// store. The host platform guarantees snapshot consistency for the duration
/// of one mapping call; the mapper never mutates the snapshot.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    roles: HashMap<RoleId, Role>,
    groups: HashMap<GroupId, Group>,
    users: HashMap<UserId, User>,
}

impl Directory {
    pub fn builder() -> DirectoryBuilder {
        DirectoryBuilder::default()
    }

    pub fn role(&self, id: RoleId) -> Option<&Role> {
        self.roles.get(&id)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }
}

/// Validating builder for [`Directory`].
///
/// Registration order is free; referential integrity is checked once in
/// [`DirectoryBuilder::build`], so forward references are fine.
#[derive(Debug, Clone, Default)]
pub struct DirectoryBuilder {
    roles: Vec<Role>,
    groups: Vec<Group>,
    users: Vec<User>,
}

impl DirectoryBuilder {
    pub fn role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    pub fn group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    pub fn user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    /// Validate and freeze the snapshot.
    ///
    /// Rejects duplicate ids, empty names, and references to unregistered
    /// ids (constituent roles, group parents, group role assignments, user
    /// memberships).
    pub fn build(self) -> DomainResult<Directory> {
        let mut roles = HashMap::with_capacity(self.roles.len());
        for role in self.roles {
            if role.name.trim().is_empty() {
                return Err(DomainError::validation("role name must not be empty"));
            }
            if roles.insert(role.id, role).is_some() {
                return Err(DomainError::conflict("duplicate role id"));
            }
        }

        let mut groups = HashMap::with_capacity(self.groups.len());
        for group in self.groups {
            if group.name.trim().is_empty() {
                return Err(DomainError::validation("group name must not be empty"));
            }
            if groups.insert(group.id, group).is_some() {
                return Err(DomainError::conflict("duplicate group id"));
            }
        }

        let mut users = HashMap::with_capacity(self.users.len());
        for user in self.users {
            if users.insert(user.id, user).is_some() {
                return Err(DomainError::conflict("duplicate user id"));
            }
        }

        for role in roles.values() {
            for constituent in &role.composites {
                if !roles.contains_key(constituent) {
                    return Err(DomainError::unknown_reference(format!(
                        "role '{}' grants unregistered role {constituent}",
                        role.name
                    )));
                }
            }
        }

        for group in groups.values() {
            if let Some(parent) = group.parent {
                if !groups.contains_key(&parent) {
                    return Err(DomainError::unknown_reference(format!(
                        "group '{}' has unregistered parent {parent}",
                        group.name
                    )));
                }
            }
            for role in &group.roles {
                if !roles.contains_key(role) {
                    return Err(DomainError::unknown_reference(format!(
                        "group '{}' assigns unregistered role {role}",
                        group.name
                    )));
                }
            }
        }

        for user in users.values() {
            for group in &user.groups {
                if !groups.contains_key(group) {
                    return Err(DomainError::unknown_reference(format!(
                        "user '{}' belongs to unregistered group {group}",
                        user.username
                    )));
                }
            }
        }

        Ok(Directory {
            roles,
            groups,
            users,
        })
    }
}
