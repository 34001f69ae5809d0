use std::fmt;

use serde_json::Value;

use crate::Details;

/// Coarse health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Up,
    Down,
    Unknown,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Up => write!(f, "UP"),
            Status::Down => write!(f, "DOWN"),
            Status::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Health report of one component.
///
/// Serializes as `{"status": "UP", "details": {...}}`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Health {
    pub status: Status,
    #[serde(default)]
    pub details: Details,
}

impl Health {
    pub fn up() -> Self {
        Self::with_status(Status::Up)
    }

    pub fn down() -> Self {
        Self::with_status(Status::Down)
    }

    pub fn with_status(status: Status) -> Self {
        Self {
            status,
            details: Details::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn is_up(&self) -> bool {
        self.status == Status::Up
    }
}

/// Source of a [`Health`] report.
pub trait HealthIndicator: Send + Sync {
    fn health(&self) -> Health;
}
