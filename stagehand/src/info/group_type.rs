use std::{fmt, str::FromStr};

use crate::Error;

/// One grouping dimension of the actor info snapshot.
///
/// Serialized and parsed as `NONE`, `INTERFACE` or `IDENTITY`
/// (parsing ignores case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupType {
    /// Adds no nesting level.
    None,
    /// Groups by the actor's simple interface name.
    Interface,
    /// Groups by the actor's identity (`"null"` for singleton actors).
    Identity,
}

impl GroupType {
    pub fn is_none(&self) -> bool {
        matches!(self, GroupType::None)
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupType::None => write!(f, "NONE"),
            GroupType::Interface => write!(f, "INTERFACE"),
            GroupType::Identity => write!(f, "IDENTITY"),
        }
    }
}

impl FromStr for GroupType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(GroupType::None),
            "INTERFACE" => Ok(GroupType::Interface),
            "IDENTITY" => Ok(GroupType::Identity),
            _ => Err(Error::UnknownGroupType(s.to_string())),
        }
    }
}

/// The two ordered grouping dimensions of the actor info snapshot.
///
/// Defaults to grouping by interface, then by identity:
///
/// ```text
/// { "Inventory": { "eu-1": { ...details } } }
/// ```
///
/// # Examples
///
/// ```rust
/// use stagehand::{GroupProperties, GroupType};
///
/// let by_identity = GroupProperties::default()
///     .with_primary(GroupType::Identity)
///     .with_secondary(GroupType::None);
/// assert_eq!(by_identity.dimensions(), [GroupType::Identity, GroupType::None]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GroupProperties {
    /// Outer grouping dimension. Default: `INTERFACE`
    pub primary: GroupType,
    /// Inner grouping dimension. Default: `IDENTITY`
    pub secondary: GroupType,
}

impl Default for GroupProperties {
    fn default() -> Self {
        Self {
            primary: GroupType::Interface,
            secondary: GroupType::Identity,
        }
    }
}

impl GroupProperties {
    pub fn with_primary(mut self, primary: GroupType) -> Self {
        self.primary = primary;
        self
    }

    pub fn with_secondary(mut self, secondary: GroupType) -> Self {
        self.secondary = secondary;
        self
    }

    /// Dimensions in nesting order, outermost first.
    pub fn dimensions(&self) -> [GroupType; 2] {
        [self.primary, self.secondary]
    }
}
