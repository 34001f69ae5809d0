use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use serde_json::{Value, json};
use stagehand::{
    Actor, ActorInfoProperties, ActorKey, AsyncLifecycleHandler, AsyncLifetimeExtension,
    DEFAULT_EXECUTION_POOL_SIZE, GroupProperties, GroupType, InfoBuilder, InfoContributor,
    PropertySource, Result, Stage, StageBootstrap, StageMode, StageProperties, Status,
    testing::{FakeActor, FakeStage, RecordingStageBuilder},
};
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn lookup(pairs: &[(&'static str, &'static str)]) -> impl PropertySource + use<> {
    let map: HashMap<&'static str, &'static str> = pairs.iter().copied().collect();
    move |key: &str| map.get(key).map(|v| v.to_string())
}

async fn launch_default() -> stagehand::Launched<FakeStage> {
    StageBootstrap::new(StageProperties::default())
        .launch(RecordingStageBuilder::new())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_properties_reach_the_builder() {
    init_tracing();
    let source = lookup(&[
        (StageProperties::CLUSTER_NAME, "orders"),
        (StageProperties::NODE_NAME, "node-a"),
        (StageProperties::STAGE_MODE, "client"),
        (StageProperties::MESSAGING_TIMEOUT_MS, "1500"),
        (StageProperties::STICKY_HEADERS, "trace-id, tenant"),
        (StageProperties::EXECUTION_POOL_SIZE, "16"),
    ]);
    let properties = StageProperties::from_lookup(&source).unwrap();

    let launched = StageBootstrap::new(properties)
        .launch(RecordingStageBuilder::new())
        .await
        .unwrap();

    let settings = launched.stage().settings();
    assert_eq!(settings.cluster_name.as_deref(), Some("orders"));
    assert_eq!(settings.node_name.as_deref(), Some("node-a"));
    assert_eq!(settings.mode, Some(StageMode::Client));
    assert_eq!(settings.messaging_timeout, Some(Duration::from_millis(1500)));
    assert_eq!(settings.sticky_headers, vec!["trace-id", "tenant"]);
    assert_eq!(settings.execution_pool_size, Some(16));
    // unset properties leave the runtime defaults alone
    assert_eq!(settings.actor_ttl, None);
    assert_eq!(settings.base_packages, None);
    assert_eq!(settings.broadcast_actor_deactivations, None);
}

#[tokio::test]
async fn test_execution_pool_size_defaults_when_unset() {
    let launched = launch_default().await;

    let settings = launched.stage().settings();
    assert_eq!(settings.execution_pool_size, Some(DEFAULT_EXECUTION_POOL_SIZE));
    assert_eq!(settings.execution_pool_size, Some(128));
    assert_eq!(settings.cluster_name, None);
    assert_eq!(settings.mode, None);
}

#[tokio::test]
async fn test_health_follows_stage_lifecycle() {
    let launched = launch_default().await;

    let health = launched.health();
    assert_eq!(health.status, Status::Up);
    assert_eq!(
        Value::Object(health.details),
        json!({ "alive": true, "state": "RUNNING" })
    );

    launched.shutdown().await.unwrap();

    let health = launched.health();
    assert_eq!(health.status, Status::Down);
    assert_eq!(
        Value::Object(health.details),
        json!({ "alive": true, "state": "STOPPED" })
    );
}

#[tokio::test]
async fn test_health_is_down_when_node_leaves_cluster() {
    let launched = launch_default().await;

    launched.stage().leave_cluster();

    let health = launched.health();
    assert!(!health.is_up());
    assert_eq!(health.details["alive"], false);
}

#[tokio::test]
async fn test_info_lists_live_actors() {
    let launched = launch_default().await;
    assert_eq!(Value::Object(launched.info().unwrap()), json!({}));

    let actor = Arc::new(FakeActor::new("FakeActor", Some("123")).with_detail("stat", 10));
    launched.stage().activate(actor.clone()).unwrap();
    launched
        .stage()
        .activate(Arc::new(FakeActor::new("FakeActor", Some("456")).with_detail("stat", 20)))
        .unwrap();

    assert_eq!(
        Value::Object(launched.info().unwrap()),
        json!({
            "actors": {
                "FakeActor": { "123": { "stat": 10 }, "456": { "stat": 20 } }
            }
        })
    );
    assert_eq!(actor.contributions(), 1);
}

#[tokio::test]
async fn test_shutdown_deactivates_actors() {
    let launched = launch_default().await;
    launched
        .stage()
        .activate(Arc::new(FakeActor::new("FakeActor", Some("123")).with_detail("stat", 1)))
        .unwrap();

    launched.shutdown().await.unwrap();

    assert_eq!(launched.stage().active_count(), 0);
    assert_eq!(Value::Object(launched.info().unwrap()), json!({}));
    let actor_info = launched.actor_info().unwrap();
    assert_eq!(actor_info.registered_count().unwrap(), 0);
}

#[tokio::test]
async fn test_grouping_is_configurable() {
    let source = lookup(&[
        (ActorInfoProperties::GROUP_PRIMARY, "identity"),
        (ActorInfoProperties::GROUP_SECONDARY, "none"),
    ]);
    let launched = StageBootstrap::new(StageProperties::default())
        .info_properties(ActorInfoProperties::from_lookup(&source).unwrap())
        .launch(RecordingStageBuilder::new())
        .await
        .unwrap();

    assert_eq!(
        launched.actor_info().unwrap().groups(),
        &GroupProperties::default()
            .with_primary(GroupType::Identity)
            .with_secondary(GroupType::None)
    );

    launched
        .stage()
        .activate(Arc::new(FakeActor::new("FakeActor", Some("123")).with_detail("stat", 1)))
        .unwrap();
    assert_eq!(
        Value::Object(launched.info().unwrap()),
        json!({ "actors": { "123": { "stat": 1 } } })
    );
}

#[tokio::test]
async fn test_disabled_actor_info_is_not_registered() {
    let launched = StageBootstrap::new(StageProperties::default())
        .info_properties(ActorInfoProperties::default().with_enabled(false))
        .launch(RecordingStageBuilder::new())
        .await
        .unwrap();

    launched
        .stage()
        .activate(Arc::new(FakeActor::new("FakeActor", Some("123")).with_detail("stat", 1)))
        .unwrap();

    assert!(launched.actor_info().is_none());
    assert_eq!(Value::Object(launched.info().unwrap()), json!({}));
    assert!(launched.health().is_up());
}

#[tokio::test]
async fn test_addons_run_before_start() {
    let configured = Arc::new(AtomicBool::new(false));
    let seen = configured.clone();

    let launched = StageBootstrap::new(StageProperties::default().with_cluster_name("orders"))
        .addon(move |stage: &FakeStage| {
            assert_eq!(stage.settings().cluster_name.as_deref(), Some("orders"));
            assert!(stage.all_nodes().is_empty());
            seen.store(true, Ordering::SeqCst);
        })
        .launch(RecordingStageBuilder::new())
        .await
        .unwrap();

    assert!(configured.load(Ordering::SeqCst));
    assert!(launched.health().is_up());
}

struct BuildInfo;

impl InfoContributor for BuildInfo {
    fn contribute(&self, builder: &mut InfoBuilder) -> Result<()> {
        builder.with_detail("build", json!({ "version": "1.2.3" }));
        Ok(())
    }
}

#[tokio::test]
async fn test_host_contributors_share_the_info_document() {
    let launched = StageBootstrap::new(StageProperties::default())
        .contributor(Arc::new(BuildInfo))
        .launch(RecordingStageBuilder::new())
        .await
        .unwrap();

    assert_eq!(
        Value::Object(launched.info().unwrap()),
        json!({ "build": { "version": "1.2.3" } })
    );

    launched
        .stage()
        .activate(Arc::new(FakeActor::new("FakeActor", None).with_detail("stat", 1)))
        .unwrap();
    assert_eq!(
        Value::Object(launched.info().unwrap()),
        json!({
            "build": { "version": "1.2.3" },
            "actors": { "FakeActor": { "null": { "stat": 1 } } }
        })
    );
}

struct Announcer(UnboundedSender<String>);

impl AsyncLifecycleHandler for Announcer {
    async fn post_activation_async(&self, actor: Arc<dyn Actor>) -> Result<()> {
        let _ = self.0.send(format!("activated {}", ActorKey::of(actor.as_ref())));
        Ok(())
    }

    async fn post_deactivation_async(&self, actor: Arc<dyn Actor>) -> Result<()> {
        let _ = self.0.send(format!("deactivated {}", ActorKey::of(actor.as_ref())));
        Ok(())
    }
}

#[tokio::test]
async fn test_async_extension_runs_in_background() {
    init_tracing();
    let (tx, mut rx) = unbounded_channel();
    let announcer = Arc::new(AsyncLifetimeExtension::new(Announcer(tx)));
    announcer.start().unwrap();

    let launched = StageBootstrap::new(StageProperties::default())
        .extension(announcer.clone())
        .launch(RecordingStageBuilder::new())
        .await
        .unwrap();

    let actor = Arc::new(FakeActor::new("FakeActor", Some("123")));
    launched.stage().activate(actor.clone()).unwrap();
    let key = ActorKey::new("FakeActor", Some("123"));
    launched.stage().deactivate(&key).unwrap();

    let timeout = Duration::from_secs(1);
    assert_eq!(
        tokio::time::timeout(timeout, rx.recv()).await.unwrap().as_deref(),
        Some("activated FakeActor/123")
    );
    assert_eq!(
        tokio::time::timeout(timeout, rx.recv()).await.unwrap().as_deref(),
        Some("deactivated FakeActor/123")
    );

    launched.shutdown().await.unwrap();
    announcer.stop().await.unwrap();
}
