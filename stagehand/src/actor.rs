use std::{borrow::Cow, sync::Arc};

use crate::InfoContributor;

/// View of an actor instance living inside the Stage.
///
/// The Stage owns activation, placement and messaging; stagehand only needs
/// enough of an actor to name it and to ask whether it reports diagnostics.
/// Instances are handed to lifetime extensions as `Arc<dyn Actor>`.
///
/// Ergonomics:
/// - With the `macros` feature, `#[derive(Actor)]` implements this trait.
/// - `interface_name` defaults to the simple name of the implementing type.
///
/// See also: [`crate::LifetimeExtension`], [`crate::InfoContributor`].
pub trait Actor: Send + Sync + 'static {
    /// Simple name of the actor's declared interface.
    ///
    /// Must stay the same for the lifetime of the instance, it is part of the
    /// key the actor info registry stores the actor under.
    fn interface_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(simple_type_name(std::any::type_name_of_val(self)))
    }

    /// Identity of the actor, or `None` for singleton actors.
    fn identity(&self) -> Option<String> {
        None
    }

    /// Dynamic capability check for diagnostics reporting.
    ///
    /// Returns the same instance as an [`InfoContributor`] when the actor opts
    /// in. The default implementation opts out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use stagehand::{Actor, InfoBuilder, InfoContributor, Result};
    ///
    /// struct Counter(u64);
    ///
    /// impl InfoContributor for Counter {
    ///     fn contribute(&self, builder: &mut InfoBuilder) -> Result<()> {
    ///         builder.with_detail("count", self.0);
    ///         Ok(())
    ///     }
    /// }
    ///
    /// impl Actor for Counter {
    ///     fn as_contributor(self: Arc<Self>) -> Option<Arc<dyn InfoContributor>> {
    ///         Some(self)
    ///     }
    /// }
    /// ```
    fn as_contributor(self: Arc<Self>) -> Option<Arc<dyn InfoContributor>> {
        None
    }
}

/// Strips the module path and generic arguments from a type name.
///
/// `my_app::actors::Inventory<u32>` becomes `Inventory`.
pub fn simple_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;
    impl Actor for Plain {}

    #[test]
    fn test_simple_type_name() {
        assert_eq!(simple_type_name("a::b::Inventory"), "Inventory");
        assert_eq!(simple_type_name("a::b::Inventory<c::D>"), "Inventory");
        assert_eq!(simple_type_name("Inventory"), "Inventory");
    }

    #[test]
    fn test_default_interface_name_is_type_name() {
        assert_eq!(Plain.interface_name(), "Plain");
    }

    #[test]
    fn test_default_actor_is_not_contributor() {
        let actor: Arc<dyn Actor> = Arc::new(Plain);
        assert!(actor.identity().is_none());
        assert!(actor.as_contributor().is_none());
    }
}
