//! The derived claim artifact.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

/// Fixed claim key the mapping is written under.
pub const CLAIM_NAME: &str = "group-roles";

/// Mapping from a group's full path to the role names granted through it.
///
/// BTree containers keep the serialized claim deterministic: paths and role
/// names surface in sorted order.
pub type GroupRolesClaim = BTreeMap<String, BTreeSet<String>>;

/// Render the claim as a JSON value for the token's claim set.
pub fn to_claim_value(claim: &GroupRolesClaim) -> Value {
    Value::Object(
        claim
            .iter()
            .map(|(path, roles)| {
                let names = roles.iter().cloned().map(Value::String).collect();
                (path.clone(), Value::Array(names))
            })
            .collect(),
    )
}
