use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::{
    sync::mpsc::{Sender, channel, error::TrySendError},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::{Actor, AsyncLifecycleHandler, Error, LifetimeExtension, Result};

use super::lifecycle_job::{LifecycleJob, LifecyclePhase};
use super::lifecycle_worker::LifecycleWorker;

/// Default number of lifecycle jobs that can wait for the worker.
pub const DEFAULT_JOB_QUEUE_SIZE: usize = 1024;

/// Runs an [`AsyncLifecycleHandler`] in the background.
///
/// `post_activation` and `post_deactivation` only enqueue a job holding a
/// weak reference to the actor and return at once, so slow handlers never
/// gate the Stage's activation path. A worker task started with
/// [`start`](Self::start) runs the jobs in order:
/// - the actor was dropped meanwhile → the job is skipped
/// - otherwise the handler is awaited; errors and panics are logged
///
/// Jobs are best-effort. When the queue is full, or the worker is stopped,
/// jobs are dropped.
///
/// # Example
///
/// ```ignore
/// let warmup = Arc::new(AsyncLifetimeExtension::new(CacheWarmer::new(pool)));
/// warmup.start()?;
/// stage_builder.extensions(vec![warmup.clone()]);
/// // ...
/// warmup.stop().await?;
/// ```
pub struct AsyncLifetimeExtension<H: AsyncLifecycleHandler> {
    sender: Sender<LifecycleJob>,
    worker: Mutex<Option<LifecycleWorker<H>>>,
    worker_handle: Mutex<Option<JoinHandle<()>>>,
    cancel_token: CancellationToken,
}

impl<H: AsyncLifecycleHandler> AsyncLifetimeExtension<H> {
    pub fn new(handler: H) -> Self {
        Self::with_queue_size(handler, DEFAULT_JOB_QUEUE_SIZE)
    }

    pub fn with_queue_size(handler: H, queue_size: usize) -> Self {
        let cancel_token = CancellationToken::new();
        let (tx, rx) = channel(queue_size);
        let worker = LifecycleWorker::new(rx, Arc::new(handler), cancel_token.clone());
        Self {
            sender: tx,
            worker: Mutex::new(Some(worker)),
            worker_handle: Mutex::new(None),
            cancel_token,
        }
    }

    /// Spawn the worker onto the current tokio runtime.
    ///
    /// Jobs enqueued before the start wait in the queue.
    pub fn start(&self) -> Result<()> {
        let mut worker = relock(&self.worker)
            .take()
            .ok_or(Error::WorkerAlreadyStarted)?;
        let handle = tokio::spawn(async move {
            worker.run().await;
        });
        *relock(&self.worker_handle) = Some(handle);
        Ok(())
    }

    /// Stop the worker. Jobs still queued are dropped.
    pub async fn stop(&self) -> Result<()> {
        self.cancel_token.cancel();
        let handle = relock(&self.worker_handle).take();
        if let Some(handle) = handle {
            handle.await?;
        }
        Ok(())
    }

    fn enqueue(&self, actor: &Arc<dyn Actor>, phase: LifecyclePhase) {
        match self.sender.try_send(LifecycleJob::new(actor, phase)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!(?phase, "Lifecycle job queue is full, dropping job");
            }
            Err(TrySendError::Closed(_)) => {
                tracing::debug!(?phase, "Lifecycle worker is stopped, dropping job");
            }
        }
    }
}

impl<H: AsyncLifecycleHandler> LifetimeExtension for AsyncLifetimeExtension<H> {
    fn post_activation(&self, actor: &Arc<dyn Actor>) -> Result<()> {
        self.enqueue(actor, LifecyclePhase::Activated);
        Ok(())
    }

    fn post_deactivation(&self, actor: &Arc<dyn Actor>) -> Result<()> {
        self.enqueue(actor, LifecyclePhase::Deactivated);
        Ok(())
    }
}

impl<H: AsyncLifecycleHandler> Drop for AsyncLifetimeExtension<H> {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

/// The guarded slots stay consistent even if a holder panicked.
fn relock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
