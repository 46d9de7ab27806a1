//! `grantmap-mapper` — derives the group→role claim written into identity
//! tokens.
//!
//! For every group a user belongs to, the mapper resolves the group's full
//! hierarchical path and the set of role names effectively granted through
//! that group (composite roles expanded transitively), then writes the
//! resulting mapping into the token's claim set under [`claim::CLAIM_NAME`].
//!
//! The mapper is a pure, stateless transformation over the read-only
//! [`grantmap_model::Directory`] snapshot; it owns no IO, no persistence and
//! no token lifecycle.

pub mod claim;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod flatten;
pub mod mapper;
pub mod path;

pub use claim::{CLAIM_NAME, GroupRolesClaim, to_claim_value};
pub use config::{
    INCLUDE_COMPOSITES, INCLUDE_IN_ACCESS_TOKEN, INCLUDE_IN_ID_TOKEN, MapperConfig,
    SPLIT_COMPOSITES,
};
pub use descriptor::{ConfigProperty, PROVIDER_ID, PropertyKind, config_properties};
pub use error::MapperError;
pub use flatten::flatten_role;
pub use mapper::GroupRoleMapper;
pub use path::full_group_path;
