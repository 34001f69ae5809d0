use std::sync::Arc;

use crate::{Details, InfoBuilder, InfoContributor, Result};

/// Composes several [`InfoContributor`]s into one info document.
///
/// This is what a host's management layer serves as its info endpoint.
/// Contributors are asked in registration order; later ones overwrite
/// top-level keys of earlier ones. A contributor with nothing to say adds no
/// key at all.
#[derive(Clone, Default)]
pub struct InfoEndpoint {
    contributors: Vec<Arc<dyn InfoContributor>>,
}

impl InfoEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contributor(mut self, contributor: Arc<dyn InfoContributor>) -> Self {
        self.contributors.push(contributor);
        self
    }

    pub fn add_contributor(&mut self, contributor: Arc<dyn InfoContributor>) {
        self.contributors.push(contributor);
    }

    /// Build the info document.
    ///
    /// A contributor error fails the whole document.
    pub fn info(&self) -> Result<Details> {
        let mut info = Details::new();
        for contributor in &self.contributors {
            let mut builder = InfoBuilder::new();
            contributor.contribute(&mut builder)?;
            info.extend(builder.build());
        }
        Ok(info)
    }
}
