use std::time::Duration;

use crate::{
    Result, StageBuilder, StageMode,
    properties::{self, PropertySource},
};

/// Execution pool size used when none is configured.
pub const DEFAULT_EXECUTION_POOL_SIZE: usize = 128;

/// Runtime settings bound from host configuration.
///
/// Every setting is optional: an unset setting leaves the runtime's own
/// default in place. The execution pool size is the exception, it always
/// reaches the builder and falls back to [`DEFAULT_EXECUTION_POOL_SIZE`]. Use the builder methods, deserialize with `serde`, or
/// read the environment with [`from_env`](Self::from_env).
///
/// # Examples
///
/// ```rust
/// use stagehand::{StageMode, StageProperties};
///
/// let props = StageProperties::default()
///     .with_cluster_name("inventory")
///     .with_mode(StageMode::Host)
///     .with_sticky_header("trace-id");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StageProperties {
    pub cluster_name: Option<String>,
    pub node_name: Option<String>,
    pub stage_mode: Option<StageMode>,
    pub messaging_timeout_ms: Option<u64>,
    pub time_to_live_secs: Option<u64>,
    pub sticky_headers: Option<Vec<String>>,
    pub base_packages: Option<Vec<String>>,
    pub concurrent_deactivations: Option<usize>,
    pub deactivation_timeout_ms: Option<u64>,
    pub execution_pool_size: Option<usize>,
    pub local_address_cache_ttl_ms: Option<u64>,
    pub local_address_cache_max_size: Option<usize>,
    pub broadcast_actor_deactivations: Option<bool>,
}

impl StageProperties {
    pub const CLUSTER_NAME: &'static str = "STAGE_CLUSTER_NAME";
    pub const NODE_NAME: &'static str = "STAGE_NODE_NAME";
    pub const STAGE_MODE: &'static str = "STAGE_MODE";
    pub const MESSAGING_TIMEOUT_MS: &'static str = "STAGE_MESSAGING_TIMEOUT_MS";
    pub const TIME_TO_LIVE_SECS: &'static str = "STAGE_TIME_TO_LIVE_SECS";
    pub const STICKY_HEADERS: &'static str = "STAGE_STICKY_HEADERS";
    pub const BASE_PACKAGES: &'static str = "STAGE_BASE_PACKAGES";
    pub const CONCURRENT_DEACTIVATIONS: &'static str = "STAGE_CONCURRENT_DEACTIVATIONS";
    pub const DEACTIVATION_TIMEOUT_MS: &'static str = "STAGE_DEACTIVATION_TIMEOUT_MS";
    pub const EXECUTION_POOL_SIZE: &'static str = "STAGE_EXECUTION_POOL_SIZE";
    pub const LOCAL_ADDRESS_CACHE_TTL_MS: &'static str = "STAGE_LOCAL_ADDRESS_CACHE_TTL_MS";
    pub const LOCAL_ADDRESS_CACHE_MAX_SIZE: &'static str = "STAGE_LOCAL_ADDRESS_CACHE_MAX_SIZE";
    pub const BROADCAST_ACTOR_DEACTIVATIONS: &'static str = "STAGE_BROADCAST_ACTOR_DEACTIVATIONS";

    /// Load from `STAGE_*` environment variables.
    ///
    /// List settings (`STAGE_STICKY_HEADERS`, `STAGE_BASE_PACKAGES`) are
    /// comma-separated.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(&properties::environment)
    }

    /// Load from an arbitrary key/value source using the `STAGE_*` keys.
    pub fn from_lookup(source: &impl PropertySource) -> Result<Self> {
        Ok(Self {
            cluster_name: properties::raw(source, Self::CLUSTER_NAME),
            node_name: properties::raw(source, Self::NODE_NAME),
            stage_mode: properties::parsed(source, Self::STAGE_MODE)?,
            messaging_timeout_ms: properties::parsed(source, Self::MESSAGING_TIMEOUT_MS)?,
            time_to_live_secs: properties::parsed(source, Self::TIME_TO_LIVE_SECS)?,
            sticky_headers: properties::list(source, Self::STICKY_HEADERS),
            base_packages: properties::list(source, Self::BASE_PACKAGES),
            concurrent_deactivations: properties::parsed(source, Self::CONCURRENT_DEACTIVATIONS)?,
            deactivation_timeout_ms: properties::parsed(source, Self::DEACTIVATION_TIMEOUT_MS)?,
            execution_pool_size: properties::parsed(source, Self::EXECUTION_POOL_SIZE)?,
            local_address_cache_ttl_ms: properties::parsed(
                source,
                Self::LOCAL_ADDRESS_CACHE_TTL_MS,
            )?,
            local_address_cache_max_size: properties::parsed(
                source,
                Self::LOCAL_ADDRESS_CACHE_MAX_SIZE,
            )?,
            broadcast_actor_deactivations: properties::parsed(
                source,
                Self::BROADCAST_ACTOR_DEACTIVATIONS,
            )?,
        })
    }

    pub fn with_cluster_name(mut self, name: impl Into<String>) -> Self {
        self.cluster_name = Some(name.into());
        self
    }

    pub fn with_node_name(mut self, name: impl Into<String>) -> Self {
        self.node_name = Some(name.into());
        self
    }

    pub fn with_mode(mut self, mode: StageMode) -> Self {
        self.stage_mode = Some(mode);
        self
    }

    pub fn with_messaging_timeout(mut self, timeout: Duration) -> Self {
        let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.messaging_timeout_ms = Some(millis);
        self
    }

    pub fn with_time_to_live(mut self, ttl: Duration) -> Self {
        self.time_to_live_secs = Some(ttl.as_secs());
        self
    }

    pub fn with_sticky_header(mut self, header: impl Into<String>) -> Self {
        self.sticky_headers
            .get_or_insert_with(Vec::new)
            .push(header.into());
        self
    }

    pub fn with_execution_pool_size(mut self, size: usize) -> Self {
        self.execution_pool_size = Some(size);
        self
    }

    /// Configured execution pool size, or [`DEFAULT_EXECUTION_POOL_SIZE`].
    pub fn execution_pool_size_or_default(&self) -> usize {
        self.execution_pool_size
            .unwrap_or(DEFAULT_EXECUTION_POOL_SIZE)
    }

    /// Pass every set property to `builder`, plus the effective execution
    /// pool size.
    pub fn apply_to<B: StageBuilder>(&self, builder: &mut B) {
        if let Some(name) = &self.cluster_name {
            builder.cluster_name(name);
        }
        if let Some(name) = &self.node_name {
            builder.node_name(name);
        }
        if let Some(mode) = self.stage_mode {
            builder.mode(mode);
        }
        if let Some(ms) = self.messaging_timeout_ms {
            builder.messaging_timeout(Duration::from_millis(ms));
        }
        if let Some(secs) = self.time_to_live_secs {
            builder.actor_ttl(Duration::from_secs(secs));
        }
        if let Some(headers) = &self.sticky_headers {
            headers.iter().for_each(|h| builder.sticky_header(h));
        }
        if let Some(packages) = &self.base_packages {
            builder.base_packages(packages);
        }
        if let Some(limit) = self.concurrent_deactivations {
            builder.concurrent_deactivations(limit);
        }
        if let Some(ms) = self.deactivation_timeout_ms {
            builder.deactivation_timeout(Duration::from_millis(ms));
        }
        builder.execution_pool_size(self.execution_pool_size_or_default());
        if let Some(ms) = self.local_address_cache_ttl_ms {
            builder.local_address_cache_ttl(Duration::from_millis(ms));
        }
        if let Some(size) = self.local_address_cache_max_size {
            builder.local_address_cache_max_size(size);
        }
        if let Some(enabled) = self.broadcast_actor_deactivations {
            builder.broadcast_actor_deactivations(enabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::Error;

    fn lookup(pairs: &[(&'static str, &'static str)]) -> impl PropertySource {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key: &str| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn empty_source_sets_nothing() {
        let props = StageProperties::from_lookup(&lookup(&[])).unwrap();
        assert_eq!(props, StageProperties::default());
        assert_eq!(props.execution_pool_size_or_default(), 128);
    }

    #[test]
    fn reads_typed_values() {
        let props = StageProperties::from_lookup(&lookup(&[
            (StageProperties::CLUSTER_NAME, "inventory"),
            (StageProperties::STAGE_MODE, "client"),
            (StageProperties::MESSAGING_TIMEOUT_MS, "2500"),
            (StageProperties::STICKY_HEADERS, "trace-id, tenant"),
            (StageProperties::BROADCAST_ACTOR_DEACTIVATIONS, "false"),
            (StageProperties::EXECUTION_POOL_SIZE, "16"),
        ]))
        .unwrap();

        assert_eq!(props.cluster_name.as_deref(), Some("inventory"));
        assert_eq!(props.stage_mode, Some(StageMode::Client));
        assert_eq!(props.messaging_timeout_ms, Some(2500));
        assert_eq!(
            props.sticky_headers,
            Some(vec!["trace-id".to_string(), "tenant".to_string()])
        );
        assert_eq!(props.broadcast_actor_deactivations, Some(false));
        assert_eq!(props.execution_pool_size_or_default(), 16);
        assert_eq!(props.node_name, None);
    }

    #[test]
    fn invalid_number_is_rejected() {
        let err = StageProperties::from_lookup(&lookup(&[(
            StageProperties::TIME_TO_LIVE_SECS,
            "forever",
        )]))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidProperty { key, .. } if key == StageProperties::TIME_TO_LIVE_SECS));
    }

    #[test]
    fn deserializes_partial_documents() {
        let props: StageProperties =
            serde_json::from_str(r#"{"cluster_name": "c", "stage_mode": "HOST"}"#).unwrap();
        assert_eq!(props.cluster_name.as_deref(), Some("c"));
        assert_eq!(props.stage_mode, Some(StageMode::Host));
        assert_eq!(props.sticky_headers, None);
    }

    #[test]
    fn huge_messaging_timeout_saturates() {
        let props = StageProperties::default().with_messaging_timeout(Duration::MAX);
        assert_eq!(props.messaging_timeout_ms, Some(u64::MAX));

        let props = StageProperties::default().with_messaging_timeout(Duration::from_secs(2));
        assert_eq!(props.messaging_timeout_ms, Some(2000));
    }
}
