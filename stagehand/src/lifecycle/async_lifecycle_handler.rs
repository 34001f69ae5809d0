use std::{future::Future, sync::Arc};

use crate::{Actor, Result};

/// Slow lifecycle work, run off the Stage's activation path.
///
/// Used through an [`AsyncLifetimeExtension`](crate::AsyncLifetimeExtension),
/// which calls these methods from a background worker some time after the
/// actor was activated or deactivated. There is no guarantee a call happens
/// at all: the actor may be gone by the time the worker gets to it, or the
/// job queue may be full.
///
/// Although the methods return futures, they can be implemented as `async fn`.
pub trait AsyncLifecycleHandler: Send + Sync + 'static {
    /// Equivalent to:
    ///
    /// ```ignore
    /// async fn post_activation_async(&self, actor: Arc<dyn Actor>) -> Result<()>;
    /// ```
    fn post_activation_async(
        &self,
        actor: Arc<dyn Actor>,
    ) -> impl Future<Output = Result<()>> + Send {
        let _a = actor;
        async { Ok(()) }
    }

    /// Equivalent to:
    ///
    /// ```ignore
    /// async fn post_deactivation_async(&self, actor: Arc<dyn Actor>) -> Result<()>;
    /// ```
    fn post_deactivation_async(
        &self,
        actor: Arc<dyn Actor>,
    ) -> impl Future<Output = Result<()>> + Send {
        let _a = actor;
        async { Ok(()) }
    }
}
