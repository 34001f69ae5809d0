use std::{
    borrow::Cow,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use serde_json::Value;

use crate::{Actor, Details, InfoBuilder, InfoContributor, Result};

/// Scriptable actor for tests.
///
/// Reports a fixed set of details, which can be changed while the actor is
/// registered. Counts how often it was asked to report.
pub struct FakeActor {
    interface: Cow<'static, str>,
    identity: Option<String>,
    contributor: bool,
    details: Mutex<Details>,
    contributions: AtomicUsize,
}

impl FakeActor {
    /// An actor that reports diagnostics.
    pub fn new(interface: impl Into<Cow<'static, str>>, identity: Option<&str>) -> Self {
        Self {
            interface: interface.into(),
            identity: identity.map(str::to_string),
            contributor: true,
            details: Mutex::new(Details::new()),
            contributions: AtomicUsize::new(0),
        }
    }

    /// An actor that does not opt into diagnostics reporting.
    pub fn silent(interface: impl Into<Cow<'static, str>>, identity: Option<&str>) -> Self {
        Self {
            contributor: false,
            ..Self::new(interface, identity)
        }
    }

    pub fn with_detail(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_detail(key, value);
        self
    }

    pub fn set_detail(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.details
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.into(), value.into());
    }

    /// How many times the actor was asked for its details.
    pub fn contributions(&self) -> usize {
        self.contributions.load(Ordering::Relaxed)
    }

    /// Wrap as the trait object the Stage hands to lifetime extensions.
    pub fn into_actor(self) -> Arc<dyn Actor> {
        Arc::new(self)
    }
}

impl Actor for FakeActor {
    fn interface_name(&self) -> Cow<'static, str> {
        self.interface.clone()
    }

    fn identity(&self) -> Option<String> {
        self.identity.clone()
    }

    fn as_contributor(self: Arc<Self>) -> Option<Arc<dyn InfoContributor>> {
        if self.contributor { Some(self) } else { None }
    }
}

impl InfoContributor for FakeActor {
    fn contribute(&self, builder: &mut InfoBuilder) -> Result<()> {
        self.contributions.fetch_add(1, Ordering::Relaxed);
        let details = self.details.lock().unwrap_or_else(|e| e.into_inner()).clone();
        builder.with_details(details);
        Ok(())
    }
}
