use std::{
    borrow::Borrow,
    hash::{Hash, Hasher},
    sync::{Arc, Weak},
};

use crate::{ActorKey, InfoContributor};

/// Registry entry for a live, introspectable actor.
///
/// Holds the actor only weakly so the registry never keeps it alive.
/// Equality and hashing look at the [`ActorKey`] alone, two handles with the
/// same key are the same registry slot whether or not their targets are alive.
pub(crate) struct ActorHandle {
    key: ActorKey,
    contributor: Weak<dyn InfoContributor>,
    /// Position in activation order, used to order merges in a snapshot.
    activation: u64,
}

impl ActorHandle {
    pub fn new(key: ActorKey, contributor: &Arc<dyn InfoContributor>, activation: u64) -> Self {
        Self {
            key,
            contributor: Arc::downgrade(contributor),
            activation,
        }
    }

    #[inline]
    pub fn key(&self) -> &ActorKey {
        &self.key
    }

    #[inline]
    pub fn activation(&self) -> u64 {
        self.activation
    }

    /// Resolves the weak pointer, `None` once the actor has been dropped.
    #[inline]
    pub fn upgrade(&self) -> Option<Arc<dyn InfoContributor>> {
        self.contributor.upgrade()
    }
}

impl PartialEq for ActorHandle {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ActorHandle {}

impl Hash for ActorHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Borrow<ActorKey> for ActorHandle {
    fn borrow(&self) -> &ActorKey {
        &self.key
    }
}
