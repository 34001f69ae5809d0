use std::{fmt, str::FromStr};

/// Whether a Stage hosts actors or only talks to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StageMode {
    /// Hosts actor activations.
    Host,
    /// Only sends messages to actors hosted elsewhere.
    Client,
}

impl fmt::Display for StageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageMode::Host => write!(f, "HOST"),
            StageMode::Client => write!(f, "CLIENT"),
        }
    }
}

impl FromStr for StageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HOST" => Ok(StageMode::Host),
            "CLIENT" => Ok(StageMode::Client),
            other => Err(format!("unknown stage mode '{other}'")),
        }
    }
}
