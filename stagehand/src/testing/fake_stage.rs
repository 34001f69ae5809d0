use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{
    Actor, ActorKey, LifetimeExtension, NodeAddress, NodeState, Result, Stage,
    testing::StageSettings,
};

/// In-process stand-in for a Stage.
///
/// Drives registered lifetime extensions the way a real runtime would, but
/// only when told to: tests activate and deactivate actors explicitly. The
/// stage keeps one strong reference per activated actor; [`forget`] drops it
/// without any callback, like a runtime losing an actor.
///
/// [`forget`]: FakeStage::forget
pub struct FakeStage {
    settings: StageSettings,
    extensions: Vec<Arc<dyn LifetimeExtension>>,
    local: NodeAddress,
    state: Mutex<NodeState>,
    nodes: Mutex<Vec<NodeAddress>>,
    active: Mutex<HashMap<ActorKey, Arc<dyn Actor>>>,
}

impl FakeStage {
    pub fn new(settings: StageSettings, extensions: Vec<Arc<dyn LifetimeExtension>>) -> Self {
        Self {
            settings,
            extensions,
            local: NodeAddress::random(),
            state: Mutex::new(NodeState::Stopped),
            nodes: Mutex::new(Vec::new()),
            active: Mutex::new(HashMap::new()),
        }
    }

    /// Settings the stage was built with.
    pub fn settings(&self) -> &StageSettings {
        &self.settings
    }

    /// Activate `actor`, running pre- and post-activation hooks.
    ///
    /// An actor already active under the same key is replaced without being
    /// deactivated. Hooks run without any stage lock held, so an extension
    /// may activate further actors.
    pub fn activate(&self, actor: Arc<dyn Actor>) -> Result<()> {
        for extension in &self.extensions {
            extension.pre_activation(&actor)?;
        }
        relock(&self.active).insert(ActorKey::of(actor.as_ref()), actor.clone());
        for extension in &self.extensions {
            extension.post_activation(&actor)?;
        }
        Ok(())
    }

    /// Deactivate the actor under `key`, running deactivation hooks.
    ///
    /// Returns `false` if no such actor is active.
    pub fn deactivate(&self, key: &ActorKey) -> Result<bool> {
        let Some(actor) = relock(&self.active).remove(key) else {
            return Ok(false);
        };
        for extension in &self.extensions {
            extension.pre_deactivation(&actor)?;
        }
        for extension in &self.extensions {
            extension.post_deactivation(&actor)?;
        }
        Ok(true)
    }

    /// Drop the stage's reference to the actor under `key`, skipping all
    /// callbacks.
    pub fn forget(&self, key: &ActorKey) -> bool {
        relock(&self.active).remove(key).is_some()
    }

    pub fn active_count(&self) -> usize {
        relock(&self.active).len()
    }

    /// Simulate the local node dropping out of cluster membership.
    pub fn leave_cluster(&self) {
        let local = self.local;
        relock(&self.nodes).retain(|node| *node != local);
    }
}

#[async_trait::async_trait]
impl Stage for FakeStage {
    async fn start(&self) -> Result<()> {
        let mut nodes = relock(&self.nodes);
        if !nodes.contains(&self.local) {
            nodes.push(self.local);
        }
        *relock(&self.state) = NodeState::Running;
        Ok(())
    }

    /// Deactivates every active actor. Membership is left as it was.
    async fn stop(&self) -> Result<()> {
        *relock(&self.state) = NodeState::Stopping;
        let keys: Vec<ActorKey> = relock(&self.active).keys().cloned().collect();
        for key in keys {
            self.deactivate(&key)?;
        }
        *relock(&self.state) = NodeState::Stopped;
        Ok(())
    }

    fn state(&self) -> NodeState {
        *relock(&self.state)
    }

    fn all_nodes(&self) -> Vec<NodeAddress> {
        relock(&self.nodes).clone()
    }

    fn local_address(&self) -> NodeAddress {
        self.local
    }
}

fn relock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
