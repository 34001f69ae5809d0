use crate::{NodeAddress, NodeState, Result};

/// The running actor runtime, as seen by stagehand.
///
/// Implemented by the host's binding to its actor runtime. The health
/// indicator reads it; the bootstrap starts and stops it.
#[async_trait::async_trait]
pub trait Stage: Send + Sync {
    /// Join the cluster and start hosting actors.
    async fn start(&self) -> Result<()>;

    /// Deactivate actors and leave the cluster.
    async fn stop(&self) -> Result<()>;

    fn state(&self) -> NodeState;

    /// Every node currently known to this stage, including itself once it
    /// has joined.
    fn all_nodes(&self) -> Vec<NodeAddress>;

    fn local_address(&self) -> NodeAddress;
}
