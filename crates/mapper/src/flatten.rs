//! Composite-role expansion.

use std::collections::{BTreeSet, HashSet};

use grantmap_core::RoleId;
use grantmap_model::{Directory, Role};

use crate::error::MapperError;

/// Flatten a role into the set of effective role names.
///
/// A leaf role flattens to the singleton set of its own name. A composite
/// role flattens to the union of flattening each constituent; when
/// `include_composites` is set, the composite's own name joins the result.
/// A role reachable through multiple constituent paths appears once.
///
/// The composite graph is assumed acyclic. Expansion threads a visited set
/// through the recursion, so a violated assumption surfaces as
/// [`MapperError::CyclicRoleGraph`] instead of non-termination.
pub fn flatten_role(
    directory: &Directory,
    role: &Role,
    include_composites: bool,
) -> Result<BTreeSet<String>, MapperError> {
    let mut names = BTreeSet::new();
    let mut expanding = HashSet::new();
    flatten_into(directory, role, include_composites, &mut expanding, &mut names)?;
    Ok(names)
}

fn flatten_into(
    directory: &Directory,
    role: &Role,
    include_composites: bool,
    expanding: &mut HashSet<RoleId>,
    names: &mut BTreeSet<String>,
) -> Result<(), MapperError> {
    if !role.is_composite() {
        names.insert(role.name.clone());
        return Ok(());
    }

    if !expanding.insert(role.id) {
        return Err(MapperError::CyclicRoleGraph(role.name.clone()));
    }

    for constituent_id in &role.composites {
        let constituent = directory
            .role(*constituent_id)
            .ok_or(MapperError::UnknownRole(*constituent_id))?;
        flatten_into(directory, constituent, include_composites, expanding, names)?;
    }

    if include_composites {
        names.insert(role.name.clone());
    }

    expanding.remove(&role.id);
    Ok(())
}
