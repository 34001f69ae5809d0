//! Health reporting for the Stage.

mod report;
mod stage_health_indicator;

pub use report::{Health, HealthIndicator, Status};
pub use stage_health_indicator::StageHealthIndicator;
