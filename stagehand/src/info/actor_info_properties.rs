use crate::{
    GroupProperties, Result,
    properties::{self, PropertySource},
};

/// Configuration of the actor info contributor.
///
/// Environment keys read by [`from_env`](Self::from_env):
///
/// | key                                  | default     |
/// |--------------------------------------|-------------|
/// | `STAGE_INFO_ACTORS_ENABLED`          | `true`      |
/// | `STAGE_INFO_ACTORS_GROUP_PRIMARY`    | `INTERFACE` |
/// | `STAGE_INFO_ACTORS_GROUP_SECONDARY`  | `IDENTITY`  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ActorInfoProperties {
    /// Whether actor details are collected and published at all.
    /// Default: true
    pub enabled: bool,

    /// How the published details are nested.
    pub group: GroupProperties,
}

impl Default for ActorInfoProperties {
    fn default() -> Self {
        Self {
            enabled: true,
            group: GroupProperties::default(),
        }
    }
}

impl ActorInfoProperties {
    pub const ENABLED: &'static str = "STAGE_INFO_ACTORS_ENABLED";
    pub const GROUP_PRIMARY: &'static str = "STAGE_INFO_ACTORS_GROUP_PRIMARY";
    pub const GROUP_SECONDARY: &'static str = "STAGE_INFO_ACTORS_GROUP_SECONDARY";

    /// Load from environment variables, defaulting whatever is unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(&properties::environment)
    }

    /// Load from an arbitrary key/value source, defaulting whatever is unset.
    pub fn from_lookup(source: &impl PropertySource) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            enabled: properties::parsed(source, Self::ENABLED)?.unwrap_or(defaults.enabled),
            group: GroupProperties {
                primary: properties::parsed(source, Self::GROUP_PRIMARY)?
                    .unwrap_or(defaults.group.primary),
                secondary: properties::parsed(source, Self::GROUP_SECONDARY)?
                    .unwrap_or(defaults.group.secondary),
            },
        })
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_group(mut self, group: GroupProperties) -> Self {
        self.group = group;
        self
    }
}
