use std::sync::Arc;

use crate::{
    ActorInfoExtension, ActorInfoProperties, ConfigurationAddon, Details, Health, HealthIndicator,
    InfoContributor, InfoEndpoint, LifetimeExtension, Result, Stage, StageBuilder,
    StageHealthIndicator, StageProperties,
};

/// Composition root wiring stagehand into a host.
///
/// - `launch()` applies the properties to the runtime's builder, registers
///   lifetime extensions (including the actor info extension unless it is
///   disabled), runs add-ons against the built stage and starts it.
/// - The returned [`Launched`] owns the running stage together with its
///   health indicator and info endpoint.
///
/// # Example
///
/// ```ignore
/// let launched = StageBootstrap::new(StageProperties::from_env()?)
///     .info_properties(ActorInfoProperties::from_env()?)
///     .extension(audit_extension)
///     .addon(|stage: &MyStage| stage.register_codec(MyCodec))
///     .launch(MyStage::builder())
///     .await?;
///
/// let health = launched.health();
/// let info = launched.info()?;
/// ```
pub struct StageBootstrap<S: Stage + 'static> {
    properties: StageProperties,
    info_properties: ActorInfoProperties,
    extensions: Vec<Arc<dyn LifetimeExtension>>,
    addons: Vec<Box<dyn ConfigurationAddon<S>>>,
    contributors: Vec<Arc<dyn InfoContributor>>,
}

impl<S: Stage + 'static> StageBootstrap<S> {
    pub fn new(properties: StageProperties) -> Self {
        Self {
            properties,
            info_properties: ActorInfoProperties::default(),
            extensions: Vec::new(),
            addons: Vec::new(),
            contributors: Vec::new(),
        }
    }

    pub fn info_properties(mut self, info_properties: ActorInfoProperties) -> Self {
        self.info_properties = info_properties;
        self
    }

    /// Register an additional lifetime extension with the stage.
    pub fn extension(mut self, extension: Arc<dyn LifetimeExtension>) -> Self {
        self.extensions.push(extension);
        self
    }

    /// Run `addon` against the built stage before it starts.
    pub fn addon(mut self, addon: impl ConfigurationAddon<S> + 'static) -> Self {
        self.addons.push(Box::new(addon));
        self
    }

    /// Publish `contributor` on the info endpoint, ahead of the actor info.
    pub fn contributor(mut self, contributor: Arc<dyn InfoContributor>) -> Self {
        self.contributors.push(contributor);
        self
    }

    pub async fn launch<B>(self, mut builder: B) -> Result<Launched<S>>
    where
        B: StageBuilder<Stage = S>,
    {
        let mut extensions = self.extensions;
        let actor_info = if self.info_properties.enabled {
            let actor_info = Arc::new(ActorInfoExtension::new(self.info_properties.group));
            extensions.push(actor_info.clone());
            Some(actor_info)
        } else {
            tracing::debug!("Actor info is disabled");
            None
        };

        self.properties.apply_to(&mut builder);
        builder.extensions(extensions);
        let stage = Arc::new(builder.build()?);

        for addon in &self.addons {
            addon.configure(stage.as_ref());
        }

        stage.start().await?;
        tracing::info!(
            node = %stage.local_address(),
            cluster = self.properties.cluster_name.as_deref().unwrap_or_default(),
            execution_pool_size = self.properties.execution_pool_size_or_default(),
            "Stage started"
        );

        let mut info = InfoEndpoint::new();
        for contributor in self.contributors {
            info.add_contributor(contributor);
        }
        if let Some(actor_info) = &actor_info {
            info.add_contributor(actor_info.clone());
        }

        let health_stage: Arc<dyn Stage> = stage.clone();
        Ok(Launched {
            health: StageHealthIndicator::new(Some(health_stage)),
            stage,
            actor_info,
            info,
        })
    }
}

/// A started stage and the operability surface around it.
pub struct Launched<S: Stage + 'static> {
    stage: Arc<S>,
    actor_info: Option<Arc<ActorInfoExtension>>,
    health: StageHealthIndicator,
    info: InfoEndpoint,
}

impl<S: Stage + 'static> Launched<S> {
    pub fn stage(&self) -> &Arc<S> {
        &self.stage
    }

    /// The actor info extension, `None` when actor info is disabled.
    pub fn actor_info(&self) -> Option<&Arc<ActorInfoExtension>> {
        self.actor_info.as_ref()
    }

    pub fn health(&self) -> Health {
        self.health.health()
    }

    /// The info document, with live actor details under `"actors"` when any
    /// actor reports some.
    pub fn info(&self) -> Result<Details> {
        self.info.info()
    }

    pub fn info_endpoint(&self) -> &InfoEndpoint {
        &self.info
    }

    /// Stop the stage. Health turns `DOWN` afterwards.
    pub async fn shutdown(&self) -> Result<()> {
        self.stage.stop().await?;
        tracing::info!(node = %self.stage.local_address(), "Stage stopped");
        Ok(())
    }
}
