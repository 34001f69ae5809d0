use std::sync::{Arc, Weak};

use crate::Actor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecyclePhase {
    Activated,
    Deactivated,
}

/// Deferred lifecycle callback. Holds the actor weakly so a queued job never
/// keeps an actor alive.
pub(crate) struct LifecycleJob {
    pub actor: Weak<dyn Actor>,
    pub phase: LifecyclePhase,
}

impl LifecycleJob {
    pub fn new(actor: &Arc<dyn Actor>, phase: LifecyclePhase) -> Self {
        Self {
            actor: Arc::downgrade(actor),
            phase,
        }
    }
}
