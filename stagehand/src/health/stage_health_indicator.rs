use std::sync::Arc;

use crate::{Health, HealthIndicator, Stage};

/// Reports whether the Stage is running and part of its cluster.
///
/// | stage                         | status | details                     |
/// |-------------------------------|--------|-----------------------------|
/// | none                          | DOWN   | empty                       |
/// | running, local node known     | UP     | `alive: true`, `state`      |
/// | otherwise                     | DOWN   | `alive`, `state`            |
///
/// `alive` tells whether the stage lists its own address among the cluster
/// nodes it knows.
pub struct StageHealthIndicator {
    stage: Option<Arc<dyn Stage>>,
}

impl StageHealthIndicator {
    pub fn new(stage: Option<Arc<dyn Stage>>) -> Self {
        Self { stage }
    }
}

impl HealthIndicator for StageHealthIndicator {
    fn health(&self) -> Health {
        let Some(stage) = &self.stage else {
            return Health::down();
        };

        let local = stage.local_address();
        let alive = stage.all_nodes().contains(&local);
        let state = stage.state();

        let health = if alive && state.is_running() {
            Health::up()
        } else {
            Health::down()
        };
        health
            .with_detail("alive", alive)
            .with_detail("state", state.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::{NodeAddress, NodeState, Result, Status};

    struct StubStage {
        local: NodeAddress,
        nodes: Mutex<Vec<NodeAddress>>,
        state: Mutex<NodeState>,
    }

    impl StubStage {
        fn new(state: NodeState, include_local: bool) -> Arc<Self> {
            let local = NodeAddress::random();
            let nodes = if include_local { vec![local] } else { vec![] };
            Arc::new(Self {
                local,
                nodes: Mutex::new(nodes),
                state: Mutex::new(state),
            })
        }
    }

    #[async_trait::async_trait]
    impl Stage for StubStage {
        async fn start(&self) -> Result<()> {
            Ok(())
        }

        async fn stop(&self) -> Result<()> {
            Ok(())
        }

        fn state(&self) -> NodeState {
            *self.state.lock().unwrap()
        }

        fn all_nodes(&self) -> Vec<NodeAddress> {
            self.nodes.lock().unwrap().clone()
        }

        fn local_address(&self) -> NodeAddress {
            self.local
        }
    }

    fn indicator(stage: Arc<StubStage>) -> StageHealthIndicator {
        let stage: Arc<dyn Stage> = stage;
        StageHealthIndicator::new(Some(stage))
    }

    #[test]
    fn no_stage_is_down_without_details() {
        let health = StageHealthIndicator::new(None).health();
        assert_eq!(health.status, Status::Down);
        assert!(health.details.is_empty());
    }

    #[test]
    fn no_nodes_is_down_and_not_alive() {
        let health = indicator(StubStage::new(NodeState::Running, false)).health();
        assert_eq!(health.status, Status::Down);
        assert_eq!(health.details["alive"], json!(false));
        assert_eq!(health.details["state"], json!("RUNNING"));
    }

    #[test]
    fn stopped_stage_is_down_but_alive() {
        let health = indicator(StubStage::new(NodeState::Stopped, true)).health();
        assert_eq!(health.status, Status::Down);
        assert_eq!(health.details["alive"], json!(true));
        assert_eq!(health.details["state"], json!("STOPPED"));
    }

    #[test]
    fn running_stage_with_local_node_is_up() {
        let health = indicator(StubStage::new(NodeState::Running, true)).health();
        assert!(health.is_up());
        assert_eq!(health.details["alive"], json!(true));
        assert_eq!(health.details["state"], json!("RUNNING"));
    }

    #[test]
    fn serializes_with_uppercase_status() {
        let health = Health::up().with_detail("alive", true);
        assert_eq!(
            serde_json::to_value(&health).unwrap(),
            json!({"status": "UP", "details": {"alive": true}})
        );
    }
}
