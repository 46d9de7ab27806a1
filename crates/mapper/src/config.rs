//! Mapper configuration.

use std::collections::HashMap;

/// Property key: recursively split composite roles.
pub const SPLIT_COMPOSITES: &str = "group-role.split-composites";

/// Property key: keep composite role names alongside their expansion.
pub const INCLUDE_COMPOSITES: &str = "group-role.include-composites";

/// Property key: host toggle placing the claim in access tokens.
pub const INCLUDE_IN_ACCESS_TOKEN: &str = "include-in-access-token";

/// Property key: host toggle placing the claim in ID tokens.
pub const INCLUDE_IN_ID_TOKEN: &str = "include-in-id-token";

/// Resolved mapper options.
///
/// Resolved once from the host's stringly-typed property map; the mapping
/// code only ever sees this struct.
///
/// When `split_composites` is false, composite roles are reported under
/// their bare name without expansion and `include_composites` has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapperConfig {
    /// Expand composite roles into their constituent leaves (default true).
    pub split_composites: bool,

    /// Keep composite names alongside their expanded leaves (default false).
    pub include_composites: bool,

    /// Token-placement toggle enforced by the host platform, not the mapper.
    pub include_in_access_token: bool,

    /// Token-placement toggle enforced by the host platform, not the mapper.
    pub include_in_id_token: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            split_composites: true,
            include_composites: false,
            include_in_access_token: true,
            include_in_id_token: true,
        }
    }
}

impl MapperConfig {
    /// Resolve options from the host's property map.
    ///
    /// A missing map falls back to defaults with a warning; a missing or
    /// unparseable value falls back per key. Resolution never fails.
    pub fn from_properties(properties: Option<&HashMap<String, String>>) -> Self {
        let defaults = Self::default();

        let Some(properties) = properties else {
            tracing::warn!("no mapper config present, using default values");
            return defaults;
        };

        Self {
            split_composites: bool_property(properties, SPLIT_COMPOSITES, defaults.split_composites),
            include_composites: bool_property(
                properties,
                INCLUDE_COMPOSITES,
                defaults.include_composites,
            ),
            include_in_access_token: bool_property(
                properties,
                INCLUDE_IN_ACCESS_TOKEN,
                defaults.include_in_access_token,
            ),
            include_in_id_token: bool_property(
                properties,
                INCLUDE_IN_ID_TOKEN,
                defaults.include_in_id_token,
            ),
        }
    }
}

fn bool_property(properties: &HashMap<String, String>, key: &str, default: bool) -> bool {
    let Some(raw) = properties.get(key) else {
        return default;
    };

    match raw.trim().to_ascii_lowercase().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(key, value = %raw, "unparseable boolean option, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_map_resolves_to_defaults() {
        let config = MapperConfig::from_properties(None);
        assert_eq!(config, MapperConfig::default());
        assert!(config.split_composites);
        assert!(!config.include_composites);
    }

    #[test]
    fn empty_map_resolves_to_defaults() {
        let config = MapperConfig::from_properties(Some(&props(&[])));
        assert_eq!(config, MapperConfig::default());
    }

    #[test]
    fn explicit_values_are_respected() {
        let properties = props(&[
            (SPLIT_COMPOSITES, "false"),
            (INCLUDE_COMPOSITES, "true"),
            (INCLUDE_IN_ACCESS_TOKEN, "false"),
        ]);

        let config = MapperConfig::from_properties(Some(&properties));
        assert!(!config.split_composites);
        assert!(config.include_composites);
        assert!(!config.include_in_access_token);
        assert!(config.include_in_id_token);
    }

    #[test]
    fn values_parse_case_insensitively() {
        let properties = props(&[(SPLIT_COMPOSITES, " False "), (INCLUDE_COMPOSITES, "TRUE")]);

        let config = MapperConfig::from_properties(Some(&properties));
        assert!(!config.split_composites);
        assert!(config.include_composites);
    }

    #[test]
    fn unparseable_value_falls_back_per_key() {
        let properties = props(&[(SPLIT_COMPOSITES, "yes please"), (INCLUDE_COMPOSITES, "true")]);

        let config = MapperConfig::from_properties(Some(&properties));
        assert!(config.split_composites);
        assert!(config.include_composites);
    }
}
