use std::{panic::AssertUnwindSafe, sync::Arc};

use futures_util::FutureExt;
use tokio::{select, sync::mpsc::Receiver};
use tokio_util::sync::CancellationToken;

use crate::{ActorKey, AsyncLifecycleHandler};

use super::lifecycle_job::{LifecycleJob, LifecyclePhase};

/// Background loop draining the lifecycle job queue, one job at a time.
pub(crate) struct LifecycleWorker<H: AsyncLifecycleHandler> {
    receiver: Receiver<LifecycleJob>,
    handler: Arc<H>,
    cancel_token: CancellationToken,
}

impl<H: AsyncLifecycleHandler> LifecycleWorker<H> {
    pub fn new(
        receiver: Receiver<LifecycleJob>,
        handler: Arc<H>,
        cancel_token: CancellationToken,
    ) -> Self {
        Self {
            receiver,
            handler,
            cancel_token,
        }
    }

    pub async fn run(&mut self) {
        loop {
            select! {
                _ = self.cancel_token.cancelled() => {
                    break;
                }
                Some(job) = self.receiver.recv() => {
                    self.handle_job(job).await;
                }
            }
        }
    }

    async fn handle_job(&self, job: LifecycleJob) {
        let Some(actor) = job.actor.upgrade() else {
            tracing::debug!(
                phase = ?job.phase,
                "Lost reference to actor. Skipping background lifecycle handling."
            );
            return;
        };
        let key = ActorKey::of(actor.as_ref());

        let result = match job.phase {
            LifecyclePhase::Activated => {
                AssertUnwindSafe(self.handler.post_activation_async(actor))
                    .catch_unwind()
                    .await
            }
            LifecyclePhase::Deactivated => {
                AssertUnwindSafe(self.handler.post_deactivation_async(actor))
                    .catch_unwind()
                    .await
            }
        };

        match result {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::warn!(actor = %key, phase = ?job.phase, error = %err, "Background lifecycle handling failed");
            }
            Err(_) => {
                tracing::error!(actor = %key, phase = ?job.phase, "Background lifecycle handler panicked");
            }
        }
    }
}
