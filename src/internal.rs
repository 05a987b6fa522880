mod channel;
mod listener_entry;

pub(crate) use channel::Channel;
pub(crate) use listener_entry::ListenerEntry;
