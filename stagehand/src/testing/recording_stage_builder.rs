use std::{sync::Arc, time::Duration};

use crate::{LifetimeExtension, Result, StageBuilder, StageMode, testing::FakeStage};

/// What a [`RecordingStageBuilder`] was told.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageSettings {
    pub cluster_name: Option<String>,
    pub node_name: Option<String>,
    pub mode: Option<StageMode>,
    pub messaging_timeout: Option<Duration>,
    pub actor_ttl: Option<Duration>,
    pub sticky_headers: Vec<String>,
    pub base_packages: Option<Vec<String>>,
    pub concurrent_deactivations: Option<usize>,
    pub deactivation_timeout: Option<Duration>,
    pub execution_pool_size: Option<usize>,
    pub local_address_cache_ttl: Option<Duration>,
    pub local_address_cache_max_size: Option<usize>,
    pub broadcast_actor_deactivations: Option<bool>,
}

/// [`StageBuilder`] that records every setting and builds a [`FakeStage`].
#[derive(Default)]
pub struct RecordingStageBuilder {
    settings: StageSettings,
    extensions: Vec<Arc<dyn LifetimeExtension>>,
}

impl RecordingStageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &StageSettings {
        &self.settings
    }
}

impl StageBuilder for RecordingStageBuilder {
    type Stage = FakeStage;

    fn cluster_name(&mut self, name: &str) {
        self.settings.cluster_name = Some(name.to_string());
    }

    fn node_name(&mut self, name: &str) {
        self.settings.node_name = Some(name.to_string());
    }

    fn mode(&mut self, mode: StageMode) {
        self.settings.mode = Some(mode);
    }

    fn messaging_timeout(&mut self, timeout: Duration) {
        self.settings.messaging_timeout = Some(timeout);
    }

    fn actor_ttl(&mut self, ttl: Duration) {
        self.settings.actor_ttl = Some(ttl);
    }

    fn sticky_header(&mut self, header: &str) {
        self.settings.sticky_headers.push(header.to_string());
    }

    fn base_packages(&mut self, packages: &[String]) {
        self.settings.base_packages = Some(packages.to_vec());
    }

    fn concurrent_deactivations(&mut self, limit: usize) {
        self.settings.concurrent_deactivations = Some(limit);
    }

    fn deactivation_timeout(&mut self, timeout: Duration) {
        self.settings.deactivation_timeout = Some(timeout);
    }

    fn execution_pool_size(&mut self, size: usize) {
        self.settings.execution_pool_size = Some(size);
    }

    fn local_address_cache_ttl(&mut self, ttl: Duration) {
        self.settings.local_address_cache_ttl = Some(ttl);
    }

    fn local_address_cache_max_size(&mut self, size: usize) {
        self.settings.local_address_cache_max_size = Some(size);
    }

    fn broadcast_actor_deactivations(&mut self, enabled: bool) {
        self.settings.broadcast_actor_deactivations = Some(enabled);
    }

    fn extensions(&mut self, extensions: Vec<Arc<dyn LifetimeExtension>>) {
        self.extensions = extensions;
    }

    fn build(self) -> Result<FakeStage> {
        Ok(FakeStage::new(self.settings, self.extensions))
    }
}
