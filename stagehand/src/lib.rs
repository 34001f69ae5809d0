//! Stagehand - operability adapter for a virtual actor runtime
//!
//! Hooks into the actor lifecycle of a host's Stage and exposes what its live
//! actors report about themselves as a grouped info document, next to a
//! health indicator for the Stage node and a configuration layer for the
//! Stage builder.
//!
//! See [`StageBootstrap`] for wiring it all together.

mod actor;
mod actor_key;
mod bootstrap;
mod error;
mod health;
mod info;
mod lifecycle;
mod properties;
mod stage;

#[cfg(feature = "test-harness")]
pub mod testing;

extern crate self as stagehand;

pub use actor::{Actor, simple_type_name};
pub use actor_key::{ActorKey, NULL_IDENTITY};
pub use bootstrap::{Launched, StageBootstrap};
pub use error::Error;
pub use health::{Health, HealthIndicator, StageHealthIndicator, Status};
pub use info::{
    ACTORS_INFO_KEY, ActorInfoExtension, ActorInfoProperties, Details, GroupProperties, GroupType,
    InfoBuilder, InfoContributor, InfoEndpoint,
};
pub use lifecycle::{
    AsyncLifecycleHandler, AsyncLifetimeExtension, DEFAULT_JOB_QUEUE_SIZE, LifetimeExtension,
};
pub use properties::PropertySource;
pub use stage::{
    ConfigurationAddon, DEFAULT_EXECUTION_POOL_SIZE, NodeAddress, NodeState, Stage, StageBuilder,
    StageMode, StageProperties,
};

#[cfg(feature = "macros")]
pub use stagehand_macros::Actor;

pub type Result<T = ()> = std::result::Result<T, Error>;
