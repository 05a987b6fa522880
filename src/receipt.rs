use std::{sync::Arc, time::SystemTime};

use uuid::Uuid;

use crate::{DispatchId, ListenerId};

/// Outcome of a single broadcast.
///
/// - `id`: unique identifier for the dispatch.
/// - `timestamp`: creation time in nanoseconds since Unix epoch (truncated to `u64`).
/// - `event`: name of the broadcast event.
/// - `notified`: listeners whose handlers ran, in registration order.
/// - `suppressed`: entries skipped because of a mute flag.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Receipt {
    id: DispatchId,
    timestamp: u64,
    event: Arc<str>,
    notified: Vec<ListenerId>,
    suppressed: usize,
}

impl Receipt {
    /// Construct a receipt for a finished dispatch of the given event.
    ///
    /// # Panics
    ///
    /// Panics if the system clock is set before the Unix epoch.
    pub(crate) fn new(event: Arc<str>, notified: Vec<ListenerId>, suppressed: usize) -> Self {
        Self {
            id: Uuid::new_v4().as_u128(),
            timestamp: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .expect("SystemTime before Unix epoch")
                .as_nanos() as u64,
            event,
            notified,
            suppressed,
        }
    }

    /// Unique identifier for this dispatch.
    pub fn id(&self) -> DispatchId {
        self.id
    }

    /// Timestamp in nanoseconds since Unix epoch (u64 truncation).
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Name of the event that was broadcast.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Listeners whose handlers were invoked, in registration order.
    pub fn notified(&self) -> &[ListenerId] {
        &self.notified
    }

    pub fn notified_count(&self) -> usize {
        self.notified.len()
    }

    /// Entries skipped because the event or their own mute flag was set.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }
}
