use crate::{InfoBuilder, Result};

/// Self-report capability.
///
/// Actors opt into diagnostics reporting by implementing this trait and
/// returning themselves from [`Actor::as_contributor`](crate::Actor::as_contributor).
/// Other components (such as the [`ActorInfoExtension`](crate::ActorInfoExtension))
/// implement it to take part in an [`InfoEndpoint`](crate::InfoEndpoint).
pub trait InfoContributor: Send + Sync {
    /// Populate `builder` with key/value diagnostic pairs.
    ///
    /// Returning an error drops whatever this call added to the builder.
    fn contribute(&self, builder: &mut InfoBuilder) -> Result<()>;
}
