use std::sync::Arc;

use crate::ListenerId;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Event '{0}' does not exist.")]
    EventNotFound(Arc<str>),

    #[error("Listener '{listener}' does not exist for event '{event}'.")]
    ListenerNotFound {
        event: Arc<str>,
        listener: ListenerId,
    },

    #[error("Listener '{listener}' already exists on event '{event}'.")]
    ListenerAlreadyExists {
        event: Arc<str>,
        listener: ListenerId,
    },

    #[error("Event name must not be empty.")]
    EmptyEventName,

    #[error("Listener name must not be empty.")]
    EmptyListenerName,

    #[error("Handler of listener '{listener}' failed for event '{event}': {source}")]
    Handler {
        event: Arc<str>,
        listener: ListenerId,
        source: BoxError,
    },

    #[error("{} handler(s) failed during broadcast.", .0.len())]
    HandlerBatch(Vec<Error>),
}

impl Error {
    /// True for the variants that report a missing event or listener.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::EventNotFound(_) | Error::ListenerNotFound { .. }
        )
    }
}
