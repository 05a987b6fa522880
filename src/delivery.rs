/// Outcome of a whisper to a single listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Delivery {
    /// The listener's handler was invoked with the payload.
    Delivered,
    /// A mute flag (event-level or listener-level) blocked the delivery.
    Suppressed,
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Delivery::Delivered)
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Delivery::Suppressed)
    }
}

impl std::fmt::Display for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Delivery::Delivered => write!(f, "Delivered"),
            Delivery::Suppressed => write!(f, "Suppressed"),
        }
    }
}
