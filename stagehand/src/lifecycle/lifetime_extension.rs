use std::sync::Arc;

use crate::{Actor, Result};

/// Plug-in receiving actor lifecycle callbacks from the Stage.
///
/// The Stage calls these hooks on its own worker threads, possibly for many
/// actors at once. Every hook must return promptly, the actor's activation
/// or deactivation does not proceed until it does. Push slow work to an
/// [`AsyncLifetimeExtension`](crate::AsyncLifetimeExtension).
///
/// All hooks default to doing nothing.
pub trait LifetimeExtension: Send + Sync {
    /// Called before the actor's own activation logic runs.
    fn pre_activation(&self, actor: &Arc<dyn Actor>) -> Result<()> {
        let _a = actor;
        Ok(())
    }

    /// Called once the actor is active.
    fn post_activation(&self, actor: &Arc<dyn Actor>) -> Result<()> {
        let _a = actor;
        Ok(())
    }

    /// Called before the actor's own deactivation logic runs.
    fn pre_deactivation(&self, actor: &Arc<dyn Actor>) -> Result<()> {
        let _a = actor;
        Ok(())
    }

    /// Called once the actor has been deactivated.
    fn post_deactivation(&self, actor: &Arc<dyn Actor>) -> Result<()> {
        let _a = actor;
        Ok(())
    }
}
