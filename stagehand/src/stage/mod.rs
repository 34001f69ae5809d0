//! Seams to the host's actor runtime.
//!
//! stagehand never implements the runtime. The host binds its runtime to
//! [`Stage`] and [`StageBuilder`]; [`StageProperties`] carries the settings
//! bound from configuration into the builder.

mod configuration_addon;
mod node;
mod stage;
mod stage_builder;
mod stage_mode;
mod stage_properties;

pub use configuration_addon::ConfigurationAddon;
pub use node::{NodeAddress, NodeState};
pub use stage::Stage;
pub use stage_builder::StageBuilder;
pub use stage_mode::StageMode;
pub use stage_properties::{DEFAULT_EXECUTION_POOL_SIZE, StageProperties};
