//! Claim-building orchestration.

use std::collections::BTreeSet;

use grantmap_model::{Directory, Group, Session, Token, User};

use crate::claim::{CLAIM_NAME, GroupRolesClaim, to_claim_value};
use crate::config::MapperConfig;
use crate::error::MapperError;
use crate::flatten::flatten_role;
use crate::path::full_group_path;

/// The group→role claim mapper.
///
/// Invoked once per token-issuance request with that request's directory
/// snapshot. Holds nothing but the resolved configuration, so one instance
/// may serve concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupRoleMapper {
    config: MapperConfig,
}

impl GroupRoleMapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Build the claim for the session's user and write it into the token.
    ///
    /// An absent token is the one caller precondition and fails with
    /// [`MapperError::MissingToken`]. An absent session, a session without a
    /// user, or a user without groups all degrade to an empty claim.
    /// Unrelated claims already on the token are left untouched.
    pub fn apply(
        &self,
        token: Option<&mut Token>,
        session: Option<&Session>,
        directory: &Directory,
    ) -> Result<(), MapperError> {
        let Some(token) = token else {
            return Err(MapperError::MissingToken);
        };

        let user = match session.and_then(|session| session.user) {
            Some(user_id) => {
                let user = directory.user(user_id);
                if user.is_none() {
                    tracing::debug!(user = %user_id, "session user not in directory snapshot");
                }
                user
            }
            None => None,
        };

        let claim = self.build_claim(user, directory)?;
        token.set_claim(CLAIM_NAME, to_claim_value(&claim));
        Ok(())
    }

    /// Build the group-path → role-set mapping for a user.
    ///
    /// When two distinct groups resolve to the same path string (duplicate
    /// membership), the later entry wins; no reconciliation is attempted.
    pub fn build_claim(
        &self,
        user: Option<&User>,
        directory: &Directory,
    ) -> Result<GroupRolesClaim, MapperError> {
        let mut claim = GroupRolesClaim::new();

        let Some(user) = user else {
            tracing::debug!("no user to map, emitting empty claim");
            return Ok(claim);
        };

        for group_id in &user.groups {
            let group = directory
                .group(*group_id)
                .ok_or(MapperError::UnknownGroup(*group_id))?;

            let roles = self.group_roles(directory, group)?;
            let path = full_group_path(directory, group)?;
            claim.insert(path, roles);
        }

        Ok(claim)
    }

    /// Role names effectively granted through one group.
    fn group_roles(
        &self,
        directory: &Directory,
        group: &Group,
    ) -> Result<BTreeSet<String>, MapperError> {
        let mut names = BTreeSet::new();

        for role_id in &group.roles {
            let role = directory
                .role(*role_id)
                .ok_or(MapperError::UnknownRole(*role_id))?;

            if self.config.split_composites {
                names.extend(flatten_role(directory, role, self.config.include_composites)?);
            } else {
                names.insert(role.name.clone());
            }
        }

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grantmap_core::{GroupId, RoleId, UserId};
    use grantmap_model::Role;

    fn names(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn missing_token_is_a_precondition_error() {
        let directory = Directory::builder().build().unwrap();
        let mapper = GroupRoleMapper::default();

        let result = mapper.apply(None, None, &directory);
        assert_eq!(result, Err(MapperError::MissingToken));
    }

    #[test]
    fn absent_user_yields_empty_claim() {
        let directory = Directory::builder().build().unwrap();
        let mapper = GroupRoleMapper::default();

        let claim = mapper.build_claim(None, &directory).unwrap();
        assert!(claim.is_empty());
    }

    #[test]
    fn user_without_groups_yields_empty_claim() {
        let user_id = UserId::new();
        let directory = Directory::builder()
            .user(User::new(user_id, "alice", vec![]))
            .build()
            .unwrap();
        let mapper = GroupRoleMapper::default();

        let claim = mapper
            .build_claim(directory.user(user_id), &directory)
            .unwrap();
        assert!(claim.is_empty());
    }

    #[test]
    fn split_composites_false_reports_bare_names() {
        let leaf = RoleId::new();
        let composite = RoleId::new();
        let group_id = GroupId::new();
        let user_id = UserId::new();
        let directory = Directory::builder()
            .role(Role::leaf(leaf, "read"))
            .role(Role::composite(composite, "editor", vec![leaf]))
            .group(Group::root(group_id, "team", vec![composite]))
            .user(User::new(user_id, "alice", vec![group_id]))
            .build()
            .unwrap();

        // include_composites must be ignored in this mode.
        let mapper = GroupRoleMapper::new(MapperConfig {
            split_composites: false,
            include_composites: true,
            ..MapperConfig::default()
        });

        let claim = mapper
            .build_claim(directory.user(user_id), &directory)
            .unwrap();
        assert_eq!(claim.get("team"), Some(&names(&["editor"])));
    }

    #[test]
    fn duplicate_group_path_keeps_the_later_entry() {
        let read = RoleId::new();
        let write = RoleId::new();
        let first = GroupId::new();
        let second = GroupId::new();
        let user_id = UserId::new();
        let directory = Directory::builder()
            .role(Role::leaf(read, "read"))
            .role(Role::leaf(write, "write"))
            .group(Group::root(first, "team", vec![read]))
            .group(Group::root(second, "team", vec![write]))
            .user(User::new(user_id, "alice", vec![first, second]))
            .build()
            .unwrap();
        let mapper = GroupRoleMapper::default();

        let claim = mapper
            .build_claim(directory.user(user_id), &directory)
            .unwrap();
        assert_eq!(claim.len(), 1);
        assert_eq!(claim.get("team"), Some(&names(&["write"])));
    }

    #[test]
    fn apply_merges_with_existing_claims() {
        let role = RoleId::new();
        let group_id = GroupId::new();
        let user_id = UserId::new();
        let directory = Directory::builder()
            .role(Role::leaf(role, "viewer"))
            .group(Group::root(group_id, "team", vec![role]))
            .user(User::new(user_id, "alice", vec![group_id]))
            .build()
            .unwrap();
        let mapper = GroupRoleMapper::default();

        let mut token = Token::new();
        token.set_claim("aud", serde_json::json!("account"));

        let session = Session::for_user(user_id);
        mapper
            .apply(Some(&mut token), Some(&session), &directory)
            .unwrap();

        assert_eq!(token.claim("aud"), Some(&serde_json::json!("account")));
        assert_eq!(
            token.claim(CLAIM_NAME),
            Some(&serde_json::json!({"team": ["viewer"]}))
        );
    }
}
