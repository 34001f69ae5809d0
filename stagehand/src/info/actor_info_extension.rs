use std::{
    collections::HashSet,
    panic::{AssertUnwindSafe, catch_unwind},
    sync::{Arc, Mutex},
};

use serde_json::Value;

use crate::{
    Actor, ActorKey, Details, GroupProperties, InfoBuilder, InfoContributor, LifetimeExtension,
    Result,
};

use super::actor_handle::ActorHandle;
use super::details_container::DetailsContainer;

/// Top-level info key the snapshot is published under.
pub const ACTORS_INFO_KEY: &str = "actors";

struct Registry {
    handles: HashSet<ActorHandle>,
    activations: u64,
}

/// Tracks live introspectable actors and aggregates their diagnostics.
///
/// Registered with the Stage as a [`LifetimeExtension`], it is the only
/// writer of its registry:
/// - `pre_activation` registers actors implementing [`InfoContributor`],
///   replacing any actor already registered under the same [`ActorKey`]
/// - `pre_deactivation` unregisters them
///
/// The registry holds actors weakly. [`snapshot`](Self::snapshot) asks every
/// live actor for its details and arranges them according to the configured
/// [`GroupProperties`]. Actors dropped without a deactivation callback are
/// evicted during the next snapshot.
///
/// One mutex guards the registry. It is never held while calling into actor
/// code, so an actor whose self-report activates another actor cannot
/// deadlock the registry.
///
/// # Example
///
/// ```ignore
/// let actor_info = Arc::new(ActorInfoExtension::new(GroupProperties::default()));
/// stage_builder.extensions(vec![actor_info.clone()]);
///
/// // later, from a health/info poll
/// let actors = actor_info.snapshot()?;
/// println!("{}", serde_json::Value::Object(actors));
/// ```
pub struct ActorInfoExtension {
    groups: GroupProperties,
    registry: Mutex<Registry>,
}

impl ActorInfoExtension {
    pub fn new(groups: GroupProperties) -> Self {
        Self {
            groups,
            registry: Mutex::new(Registry {
                handles: HashSet::new(),
                activations: 0,
            }),
        }
    }

    pub fn groups(&self) -> &GroupProperties {
        &self.groups
    }

    /// Register `actor` if it reports diagnostics.
    ///
    /// Holds the registry lock for the insertion only.
    pub fn on_activate(&self, actor: &Arc<dyn Actor>) -> Result<()> {
        let Some(contributor) = Arc::clone(actor).as_contributor() else {
            return Ok(());
        };
        let key = ActorKey::of(actor.as_ref());
        tracing::trace!(actor = %key, "Registering actor info contributor");

        let mut registry = self.registry.lock()?;
        registry.activations += 1;
        let handle = ActorHandle::new(key, &contributor, registry.activations);
        registry.handles.replace(handle);
        Ok(())
    }

    /// Unregister `actor`, so it disappears from the next snapshot even if it
    /// is still referenced elsewhere.
    pub fn on_deactivate(&self, actor: &Arc<dyn Actor>) -> Result<()> {
        if Arc::clone(actor).as_contributor().is_none() {
            return Ok(());
        }
        let key = ActorKey::of(actor.as_ref());
        tracing::trace!(actor = %key, "Unregistering actor info contributor");

        self.registry.lock()?.handles.remove(&key);
        Ok(())
    }

    /// Number of registry slots, including dropped actors not yet evicted.
    pub fn registered_count(&self) -> Result<usize> {
        Ok(self.registry.lock()?.handles.len())
    }

    /// Collect the details of every live contributor, grouped.
    ///
    /// Evicts actors that have been dropped. Actors are asked in activation
    /// order, so when two land on the same group path the later activation
    /// wins on colliding keys. An actor whose self-report fails or panics is
    /// logged and left out; the rest of the snapshot is unaffected.
    ///
    /// Returns an empty map when no actor is live.
    pub fn snapshot(&self) -> Result<Details> {
        let mut container = DetailsContainer::new(&self.groups);
        for (key, contributor) in self.live_contributors()? {
            if let Some(details) = Self::collect_details(&key, contributor.as_ref()) {
                container.merge(&key, details);
            }
        }
        Ok(container.into_details())
    }

    /// Upgrade every handle under the lock, evicting the dead ones.
    fn live_contributors(&self) -> Result<Vec<(ActorKey, Arc<dyn InfoContributor>)>> {
        let mut live = {
            let mut registry = self.registry.lock()?;
            let mut live = Vec::with_capacity(registry.handles.len());
            registry.handles.retain(|handle| match handle.upgrade() {
                Some(contributor) => {
                    live.push((handle.activation(), handle.key().clone(), contributor));
                    true
                }
                None => {
                    tracing::debug!(actor = %handle.key(), "Lost reference to actor");
                    false
                }
            });
            live
        };
        live.sort_by_key(|(activation, _, _)| *activation);
        Ok(live
            .into_iter()
            .map(|(_, key, contributor)| (key, contributor))
            .collect())
    }

    fn collect_details(key: &ActorKey, contributor: &dyn InfoContributor) -> Option<Details> {
        let mut builder = InfoBuilder::new();
        match catch_unwind(AssertUnwindSafe(|| contributor.contribute(&mut builder))) {
            Ok(Ok(())) => Some(builder.build()),
            Ok(Err(err)) => {
                tracing::warn!(actor = %key, error = %err, "Actor failed to report info, omitting");
                None
            }
            Err(_) => {
                tracing::error!(actor = %key, "Actor panicked while reporting info, omitting");
                None
            }
        }
    }
}

impl LifetimeExtension for ActorInfoExtension {
    fn pre_activation(&self, actor: &Arc<dyn Actor>) -> Result<()> {
        self.on_activate(actor)
    }

    fn pre_deactivation(&self, actor: &Arc<dyn Actor>) -> Result<()> {
        self.on_deactivate(actor)
    }
}

/// Publishes the snapshot under [`ACTORS_INFO_KEY`], or nothing when no actor
/// reports details.
impl InfoContributor for ActorInfoExtension {
    fn contribute(&self, builder: &mut InfoBuilder) -> Result<()> {
        let details = self.snapshot()?;
        if !details.is_empty() {
            builder.with_detail(ACTORS_INFO_KEY, Value::Object(details));
        }
        Ok(())
    }
}
