use std::fmt;

use uuid::Uuid;

/// Lifecycle state of a Stage node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeState {
    Running,
    Stopping,
    Stopped,
}

impl NodeState {
    pub fn is_running(&self) -> bool {
        matches!(self, NodeState::Running)
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeState::Running => write!(f, "RUNNING"),
            NodeState::Stopping => write!(f, "STOPPING"),
            NodeState::Stopped => write!(f, "STOPPED"),
        }
    }
}

/// Cluster-wide address of a Stage node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct NodeAddress(Uuid);

impl NodeAddress {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// A fresh, random address.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
