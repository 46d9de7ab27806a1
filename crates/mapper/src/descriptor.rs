//! Registration metadata exposed to the host platform.
//!
//! The host's mapper registry wants an id, display strings and the list of
//! recognized configuration properties. This is plain data; implementing the
//! host's registration trait is the embedding layer's job.

use crate::config::{
    INCLUDE_COMPOSITES, INCLUDE_IN_ACCESS_TOKEN, INCLUDE_IN_ID_TOKEN, SPLIT_COMPOSITES,
};

/// Stable provider id under which the mapper registers.
pub const PROVIDER_ID: &str = "oidc-group-role-mapper";

/// Value type of a configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Boolean,
}

/// Descriptor of one recognized configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigProperty {
    pub name: &'static str,
    pub label: &'static str,
    pub help_text: &'static str,
    pub kind: PropertyKind,
    /// Default rendered the way the host's stringly-typed store expects it.
    pub default_value: &'static str,
}

pub fn display_type() -> &'static str {
    "Group to Role"
}

pub fn display_category() -> &'static str {
    "Token mapper"
}

pub fn help_text() -> &'static str {
    "Creates a map in the token where the keys are groups to which the user \
     belongs and values are lists of roles inherited from said groups"
}

/// All recognized configuration properties, in display order.
pub fn config_properties() -> Vec<ConfigProperty> {
    vec![
        ConfigProperty {
            name: INCLUDE_IN_ACCESS_TOKEN,
            label: "Add to access token",
            help_text: "Write the claim into access tokens.",
            kind: PropertyKind::Boolean,
            default_value: "true",
        },
        ConfigProperty {
            name: INCLUDE_IN_ID_TOKEN,
            label: "Add to ID token",
            help_text: "Write the claim into ID tokens.",
            kind: PropertyKind::Boolean,
            default_value: "true",
        },
        ConfigProperty {
            name: SPLIT_COMPOSITES,
            label: "Split composite roles",
            help_text: "Recursively split composite roles.",
            kind: PropertyKind::Boolean,
            default_value: "true",
        },
        ConfigProperty {
            name: INCLUDE_COMPOSITES,
            label: "Include composite roles when splitting",
            help_text: "If 'Split composite roles' is set, also keep the split composite roles.",
            kind: PropertyKind::Boolean,
            default_value: "false",
        },
    ]
}
