use std::{borrow::Cow, fmt, hash::Hash, sync::Arc};

use crate::Actor;

/// Identity literal used when an actor has no identity.
pub const NULL_IDENTITY: &str = "null";

/// Registry key of an introspectable actor.
///
/// Two keys are equal when both the interface name and the identity match,
/// regardless of which actor instance they were taken from. The actor info
/// registry therefore holds at most one actor per key.
///
/// Keys are cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActorKey {
    type_name: Arc<str>,
    identity: Option<Arc<str>>,
}

impl ActorKey {
    pub fn new(type_name: impl Into<Arc<str>>, identity: Option<&str>) -> Self {
        Self {
            type_name: type_name.into(),
            identity: identity.map(Arc::from),
        }
    }

    /// Reads the key of a live actor.
    pub fn of(actor: &dyn Actor) -> Self {
        let type_name: Arc<str> = match actor.interface_name() {
            Cow::Borrowed(name) => Arc::from(name),
            Cow::Owned(name) => Arc::from(name),
        };
        Self {
            type_name,
            identity: actor.identity().map(Arc::from),
        }
    }

    /// Simple interface name of the actor.
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[inline]
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Identity, or the [`NULL_IDENTITY`] literal for singleton actors.
    #[inline]
    pub fn identity_or_null(&self) -> &str {
        self.identity().unwrap_or(NULL_IDENTITY)
    }
}

impl fmt::Display for ActorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_name, self.identity_or_null())
    }
}
