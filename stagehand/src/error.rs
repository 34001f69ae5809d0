use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Actor info registry lock is poisoned")]
    RegistryPoisoned,

    #[error("Unknown actor grouping '{0}', expected one of NONE, INTERFACE, IDENTITY")]
    UnknownGroupType(String),

    #[error("Invalid value '{value}' for property {key}")]
    InvalidProperty { key: String, value: String },

    #[error("Lifecycle worker has already started.")]
    WorkerAlreadyStarted,

    #[error("Lifecycle worker task join error: {0}")]
    WorkerJoinError(#[from] tokio::task::JoinError),

    #[error("Stage error: {0}")]
    Stage(String),

    #[error("Error external to stagehand occurred: {0}")]
    External(Arc<str>),
}

impl Error {
    pub fn external(msg: impl Into<Arc<str>>) -> Self {
        Error::External(msg.into())
    }

    pub(crate) fn invalid_property(key: &str, value: impl Into<String>) -> Self {
        Error::InvalidProperty {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Error::RegistryPoisoned
    }
}
