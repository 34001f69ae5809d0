/// Host hook run against a freshly built stage, before it starts.
///
/// Use it for runtime settings stagehand has no property for.
pub trait ConfigurationAddon<S: ?Sized>: Send + Sync {
    fn configure(&self, stage: &S);
}

impl<S: ?Sized, F> ConfigurationAddon<S> for F
where
    F: Fn(&S) + Send + Sync,
{
    fn configure(&self, stage: &S) {
        self(stage)
    }
}
