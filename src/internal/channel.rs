use std::sync::Arc;

use super::ListenerEntry;
use crate::ListenerId;

/// Per-event state: the event-level mute flag plus the listeners
/// registered for it, kept in registration order.
pub(crate) struct Channel<P> {
    pub name: Arc<str>,
    pub muted: bool,
    pub listeners: Vec<ListenerEntry<P>>,
}

impl<P> Channel<P> {
    pub fn new(name: Arc<str>) -> Channel<P> {
        Channel {
            name,
            muted: false,
            listeners: Vec::new(),
        }
    }

    pub fn entry(&self, id: &ListenerId) -> Option<&ListenerEntry<P>> {
        self.listeners.iter().find(|l| &l.id == id)
    }

    pub fn entry_mut(&mut self, id: &ListenerId) -> Option<&mut ListenerEntry<P>> {
        self.listeners.iter_mut().find(|l| &l.id == id)
    }

    pub fn position(&self, id: &ListenerId) -> Option<usize> {
        self.listeners.iter().position(|l| &l.id == id)
    }
}

impl<P> std::fmt::Debug for Channel<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("muted", &self.muted)
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(id: &str) -> ListenerEntry<u32> {
        ListenerEntry::new(ListenerId::from(id), Box::new(|_| Ok(())))
    }

    #[test]
    fn test_entry_lookup_by_id() {
        let mut channel = Channel::<u32>::new(Arc::from("tick"));
        channel.listeners.push(noop("first"));
        channel.listeners.push(noop("second"));

        assert!(channel.entry(&ListenerId::from("first")).is_some());
        assert!(channel.entry(&ListenerId::from("missing")).is_none());
        assert_eq!(channel.position(&ListenerId::from("second")), Some(1));
    }

    #[test]
    fn test_new_channel_starts_unmuted_and_empty() {
        let channel = Channel::<u32>::new(Arc::from("tick"));
        assert!(!channel.muted);
        assert!(channel.listeners.is_empty());
    }
}
