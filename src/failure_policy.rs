use std::fmt;

/// What [`EventHub::send_messages`](crate::EventHub::send_messages) does
/// when a handler returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailurePolicy {
    /// Propagate the first failure immediately; remaining listeners are skipped.
    #[default]
    FailFast,
    /// Keep delivering to the remaining listeners, then report every failure
    /// at once as [`Error::HandlerBatch`](crate::Error::HandlerBatch).
    CollectAll,
}

impl FailurePolicy {
    pub fn is_fail_fast(&self) -> bool {
        matches!(self, FailurePolicy::FailFast)
    }

    pub fn is_collect_all(&self) -> bool {
        matches!(self, FailurePolicy::CollectAll)
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::FailFast => write!(f, "FailFast"),
            FailurePolicy::CollectAll => write!(f, "CollectAll"),
        }
    }
}
