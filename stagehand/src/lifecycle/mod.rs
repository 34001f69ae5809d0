//! Actor lifecycle hooks.
//!
//! - [`LifetimeExtension`]: synchronous hooks the Stage calls around actor
//!   activation and deactivation.
//! - [`AsyncLifetimeExtension`]: runs an [`AsyncLifecycleHandler`] on a
//!   background worker, off the activation path.

mod async_lifecycle_handler;
mod async_lifetime_extension;
mod lifecycle_job;
mod lifecycle_worker;
mod lifetime_extension;

pub use async_lifecycle_handler::AsyncLifecycleHandler;
pub use async_lifetime_extension::{AsyncLifetimeExtension, DEFAULT_JOB_QUEUE_SIZE};
pub use lifetime_extension::LifetimeExtension;
