use std::{hash::Hash, ops::Deref, sync::Arc};

/// Name identifying a listener within a single event.
///
/// Assigned at registration and used for every later lookup (mute,
/// destroy, whisper). Ids compare by content, so the same name used on
/// two events refers to two independent registrations, and a freshly
/// built id matches one stored in the hub.
///
/// Ids are cheap to clone and can be stored for later use.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(Arc<str>);

impl ListenerId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the listener's name as given at registration.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for ListenerId {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for ListenerId {}

impl From<&str> for ListenerId {
    fn from(name: &str) -> Self {
        Self(Arc::from(name))
    }
}

impl From<String> for ListenerId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for ListenerId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl Deref for ListenerId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
