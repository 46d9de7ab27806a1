//! Group path resolution.

use std::collections::HashSet;

use grantmap_model::{Directory, Group};

use crate::error::MapperError;

/// Resolve a group's fully-qualified hierarchical path.
///
/// Walks the parent chain to the hierarchy root and joins the names
/// root-to-leaf with `/`: a group `"group"` under `"parentGroup"` resolves
/// to `"parentGroup/group"`; a root group resolves to its own name.
///
/// The parent relation is assumed to form a tree. A chain that revisits a
/// group is reported as [`MapperError::CyclicGroupChain`] rather than looping
/// forever.
pub fn full_group_path(directory: &Directory, group: &Group) -> Result<String, MapperError> {
    let mut reverse_path = vec![group.name.as_str()];
    let mut seen = HashSet::from([group.id]);

    let mut current = group;
    while let Some(parent_id) = current.parent {
        let parent = directory
            .group(parent_id)
            .ok_or(MapperError::UnknownGroup(parent_id))?;
        if !seen.insert(parent.id) {
            return Err(MapperError::CyclicGroupChain(parent.name.clone()));
        }
        reverse_path.push(parent.name.as_str());
        current = parent;
    }

    reverse_path.reverse();
    Ok(reverse_path.join("/"))
}
