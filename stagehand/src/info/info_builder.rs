use serde_json::{Map, Value};

/// Flat or nested key/value diagnostic details.
pub type Details = Map<String, Value>;

/// Collects key/value details from an [`InfoContributor`](crate::InfoContributor).
///
/// Later details overwrite earlier ones with the same key.
///
/// # Examples
///
/// ```rust
/// use stagehand::InfoBuilder;
///
/// let mut builder = InfoBuilder::new();
/// builder.with_detail("stat", 10).with_detail("region", "eu-west");
/// let details = builder.build();
/// assert_eq!(details["stat"], 10);
/// ```
#[derive(Debug, Default, Clone)]
pub struct InfoBuilder {
    details: Details,
}

impl InfoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single detail.
    pub fn with_detail(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Record every entry of `details`.
    pub fn with_details(&mut self, details: Details) -> &mut Self {
        self.details.extend(details);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn build(self) -> Details {
        self.details
    }
}
