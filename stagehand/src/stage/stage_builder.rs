use std::{sync::Arc, time::Duration};

use crate::{LifetimeExtension, Result, Stage, StageMode};

/// Builder of the host's actor runtime.
///
/// [`StageProperties::apply_to`](crate::StageProperties::apply_to) calls a
/// setter only for properties that are set, leaving the runtime's own
/// defaults in place otherwise. Setters a runtime has no equivalent for can
/// be left unimplemented; they default to ignoring the value.
pub trait StageBuilder {
    type Stage: Stage + 'static;

    fn cluster_name(&mut self, name: &str) {
        let _n = name;
    }

    fn node_name(&mut self, name: &str) {
        let _n = name;
    }

    fn mode(&mut self, mode: StageMode) {
        let _m = mode;
    }

    /// How long a remote call waits for its response.
    fn messaging_timeout(&mut self, timeout: Duration) {
        let _t = timeout;
    }

    /// How long an idle actor stays activated.
    fn actor_ttl(&mut self, ttl: Duration) {
        let _t = ttl;
    }

    /// Message header propagated along call chains. Called once per header.
    fn sticky_header(&mut self, header: &str) {
        let _h = header;
    }

    /// Where the runtime looks for actor implementations.
    fn base_packages(&mut self, packages: &[String]) {
        let _p = packages;
    }

    fn concurrent_deactivations(&mut self, limit: usize) {
        let _l = limit;
    }

    fn deactivation_timeout(&mut self, timeout: Duration) {
        let _t = timeout;
    }

    fn execution_pool_size(&mut self, size: usize) {
        let _s = size;
    }

    fn local_address_cache_ttl(&mut self, ttl: Duration) {
        let _t = ttl;
    }

    fn local_address_cache_max_size(&mut self, size: usize) {
        let _s = size;
    }

    fn broadcast_actor_deactivations(&mut self, enabled: bool) {
        let _e = enabled;
    }

    /// Lifetime extensions the runtime must call around actor activation
    /// and deactivation.
    fn extensions(&mut self, extensions: Vec<Arc<dyn LifetimeExtension>>);

    fn build(self) -> Result<Self::Stage>;
}
