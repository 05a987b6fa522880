use crate::{Handler, ListenerId};

pub(crate) struct ListenerEntry<P> {
    pub id: ListenerId,
    pub muted: bool,
    pub handler: Handler<P>,
}

impl<P> ListenerEntry<P> {
    pub fn new(id: ListenerId, handler: Handler<P>) -> ListenerEntry<P> {
        ListenerEntry {
            id,
            muted: false,
            handler,
        }
    }
}

impl<P> PartialEq for ListenerEntry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<P> Eq for ListenerEntry<P> {}

impl<P> std::fmt::Debug for ListenerEntry<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerEntry")
            .field("id", &self.id)
            .field("muted", &self.muted)
            .finish_non_exhaustive()
    }
}
