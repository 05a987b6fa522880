use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    Config, Delivery, Error, HandlerResult, ListenerId, Receipt, Result,
    internal::{Channel, ListenerEntry},
};

/// Synchronous publish/subscribe hub keyed by named events.
///
/// - Register listeners with `register_listener(event, listener, handler)`.
/// - `mute_listener()` / `unmute_listener()` toggle a single listener.
/// - `mute_event()` / `unmute_event()` toggle a whole event; the event-level
///   flag is independent of the listener-level flags and also covers
///   listeners registered later.
/// - `destroy_listener()` / `destroy_event()` remove registrations.
/// - `send_messages(event, payload)` broadcasts to every unmuted listener.
/// - `send_whisper(event, listener, payload)` targets a single listener.
///
/// All calls run to completion on the caller's thread. Events and listeners
/// are kept in registration order, so broadcasts are deterministic.
///
/// # Examples
///
/// ```rust
/// use std::{cell::RefCell, rc::Rc};
/// use murmur::EventHub;
///
/// let mut hub = EventHub::<u32>::default();
/// let log = Rc::new(RefCell::new(Vec::new()));
///
/// let seen = log.clone();
/// hub.register_listener("tick", "counter", move |n: &u32| {
///     seen.borrow_mut().push(*n);
///     Ok(())
/// })?;
///
/// let receipt = hub.send_messages("tick", &7)?;
/// assert_eq!(receipt.notified_count(), 1);
/// assert_eq!(log.borrow().as_slice(), &[7]);
/// # Ok::<(), murmur::Error>(())
/// ```
///
/// See also: [`Observable`](crate::Observable), [`Config`], [`Receipt`].
pub struct EventHub<P> {
    config: Config,
    channels: Vec<Channel<P>>,
}

impl<P> EventHub<P> {
    /// Create a new hub with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            channels: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a listener for an event, creating the event on first use.
    ///
    /// The entry starts unmuted. A second registration of the same
    /// `(event, listener)` pair is rejected with
    /// [`Error::ListenerAlreadyExists`]; use [`replace_listener`](Self::replace_listener)
    /// to overwrite.
    pub fn register_listener<L, H>(&mut self, event: &str, listener: L, handler: H) -> Result<()>
    where
        L: Into<ListenerId>,
        H: FnMut(&P) -> HandlerResult + 'static,
    {
        let listener = listener.into();
        Self::validate(event, &listener)?;
        let channel = self.ensure_channel(event);
        if channel.entry(&listener).is_some() {
            return Err(Error::ListenerAlreadyExists {
                event: channel.name.clone(),
                listener,
            });
        }
        channel
            .listeners
            .push(ListenerEntry::new(listener, Box::new(handler)));
        Ok(())
    }

    /// Register a listener, overwriting any existing entry for the pair.
    ///
    /// An overwritten entry loses its previous handler and mute state and
    /// moves to the end of the delivery order, as if registered anew.
    pub fn replace_listener<L, H>(&mut self, event: &str, listener: L, handler: H) -> Result<()>
    where
        L: Into<ListenerId>,
        H: FnMut(&P) -> HandlerResult + 'static,
    {
        let listener = listener.into();
        Self::validate(event, &listener)?;
        let channel = self.ensure_channel(event);
        if let Some(pos) = channel.position(&listener) {
            warn!(event = %channel.name, listener = %listener, "Overwriting existing listener");
            channel.listeners.remove(pos);
        }
        channel
            .listeners
            .push(ListenerEntry::new(listener, Box::new(handler)));
        Ok(())
    }

    /// Mute a listener so it stops receiving messages of the event.
    /// Muting an already-muted listener is a no-op success.
    pub fn mute_listener<L: Into<ListenerId>>(&mut self, event: &str, listener: L) -> Result<()> {
        self.set_listener_mute(event, listener.into(), true)
    }

    /// Unmute a listener so it receives messages of the event again.
    pub fn unmute_listener<L: Into<ListenerId>>(&mut self, event: &str, listener: L) -> Result<()> {
        self.set_listener_mute(event, listener.into(), false)
    }

    /// Remove a listener from an event.
    ///
    /// The event itself stays registered even when its last listener is
    /// destroyed; only [`destroy_event`](Self::destroy_event) removes it.
    pub fn destroy_listener<L: Into<ListenerId>>(
        &mut self,
        event: &str,
        listener: L,
    ) -> Result<()> {
        let listener = listener.into();
        let channel = self
            .channel_mut(event)
            .ok_or_else(|| Error::EventNotFound(Arc::from(event)))?;
        let name = channel.name.clone();
        let pos = channel
            .position(&listener)
            .ok_or(Error::ListenerNotFound {
                event: name,
                listener,
            })?;
        channel.listeners.remove(pos);
        Ok(())
    }

    /// Mute an event so no listener receives its messages, including
    /// listeners registered after this call. Listener-level flags are
    /// left untouched.
    pub fn mute_event(&mut self, event: &str) -> Result<()> {
        self.set_event_mute(event, true)
    }

    /// Unmute an event. Each listener falls back to its own mute flag.
    pub fn unmute_event(&mut self, event: &str) -> Result<()> {
        self.set_event_mute(event, false)
    }

    /// Remove an event and all its listeners.
    pub fn destroy_event(&mut self, event: &str) -> Result<()> {
        let pos = self
            .channels
            .iter()
            .position(|c| c.name.as_ref() == event)
            .ok_or_else(|| Error::EventNotFound(Arc::from(event)))?;
        self.channels.remove(pos);
        Ok(())
    }

    /// Send a payload to a single listener of an event.
    ///
    /// Returns [`Delivery::Suppressed`] without error when either the
    /// event-level or the listener-level mute flag is set.
    pub fn send_whisper<L: Into<ListenerId>>(
        &mut self,
        event: &str,
        listener: L,
        payload: &P,
    ) -> Result<Delivery> {
        let listener = listener.into();
        let channel = self
            .channel_mut(event)
            .ok_or_else(|| Error::EventNotFound(Arc::from(event)))?;
        let name = channel.name.clone();
        let event_muted = channel.muted;
        let entry = channel.entry_mut(&listener).ok_or(Error::ListenerNotFound {
            event: name.clone(),
            listener,
        })?;

        if event_muted || entry.muted {
            debug!(event = %name, listener = %entry.id, "Whisper suppressed by mute");
            return Ok(Delivery::Suppressed);
        }

        debug!(event = %name, listener = %entry.id, "Delivering whisper");
        (entry.handler)(payload).map_err(|source| Error::Handler {
            event: name,
            listener: entry.id.clone(),
            source,
        })?;
        Ok(Delivery::Delivered)
    }

    /// Broadcast a payload to every unmuted listener of an event, in
    /// registration order.
    ///
    /// A muted event suppresses the whole broadcast. Handler failures are
    /// handled per the configured [`FailurePolicy`](crate::FailurePolicy).
    pub fn send_messages(&mut self, event: &str, payload: &P) -> Result<Receipt> {
        let policy = self.config.failure_policy;
        let channel = self
            .channel_mut(event)
            .ok_or_else(|| Error::EventNotFound(Arc::from(event)))?;
        let name = channel.name.clone();

        if channel.muted {
            debug!(event = %name, "Broadcast suppressed, event is muted");
            return Ok(Receipt::new(name, Vec::new(), channel.listeners.len()));
        }

        // Snapshot the delivery set before invoking any handler.
        let targets: Vec<ListenerId> = channel
            .listeners
            .iter()
            .filter(|l| !l.muted)
            .map(|l| l.id.clone())
            .collect();
        let suppressed = channel.listeners.len() - targets.len();

        let mut notified = Vec::with_capacity(targets.len());
        let mut failures = Vec::new();
        for id in targets {
            let Some(entry) = channel.entry_mut(&id) else {
                continue;
            };
            debug!(event = %name, listener = %id, "Delivering message");
            match (entry.handler)(payload) {
                Ok(()) => notified.push(id),
                Err(source) => {
                    let failure = Error::Handler {
                        event: name.clone(),
                        listener: id,
                        source,
                    };
                    if policy.is_fail_fast() {
                        return Err(failure);
                    }
                    failures.push(failure);
                }
            }
        }

        if failures.is_empty() {
            Ok(Receipt::new(name, notified, suppressed))
        } else {
            Err(Error::HandlerBatch(failures))
        }
    }

    pub fn contains_event(&self, event: &str) -> bool {
        self.channel(event).is_some()
    }

    /// Registered event names, in registration order.
    pub fn event_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name.as_ref()).collect()
    }

    /// Ids of the listeners registered for an event, in registration order.
    pub fn listener_ids(&self, event: &str) -> Result<Vec<ListenerId>> {
        let channel = self
            .channel(event)
            .ok_or_else(|| Error::EventNotFound(Arc::from(event)))?;
        Ok(channel.listeners.iter().map(|l| l.id.clone()).collect())
    }

    pub fn listener_count(&self, event: &str) -> Result<usize> {
        let channel = self
            .channel(event)
            .ok_or_else(|| Error::EventNotFound(Arc::from(event)))?;
        Ok(channel.listeners.len())
    }

    pub fn is_event_muted(&self, event: &str) -> Result<bool> {
        let channel = self
            .channel(event)
            .ok_or_else(|| Error::EventNotFound(Arc::from(event)))?;
        Ok(channel.muted)
    }

    pub fn is_listener_muted<L: Into<ListenerId>>(&self, event: &str, listener: L) -> Result<bool> {
        let listener = listener.into();
        let channel = self
            .channel(event)
            .ok_or_else(|| Error::EventNotFound(Arc::from(event)))?;
        let entry = channel.entry(&listener).ok_or(Error::ListenerNotFound {
            event: channel.name.clone(),
            listener,
        })?;
        Ok(entry.muted)
    }

    fn set_listener_mute(&mut self, event: &str, listener: ListenerId, muted: bool) -> Result<()> {
        let channel = self
            .channel_mut(event)
            .ok_or_else(|| Error::EventNotFound(Arc::from(event)))?;
        let name = channel.name.clone();
        let entry = channel.entry_mut(&listener).ok_or(Error::ListenerNotFound {
            event: name,
            listener,
        })?;
        entry.muted = muted;
        Ok(())
    }

    fn set_event_mute(&mut self, event: &str, muted: bool) -> Result<()> {
        let channel = self
            .channel_mut(event)
            .ok_or_else(|| Error::EventNotFound(Arc::from(event)))?;
        channel.muted = muted;
        Ok(())
    }

    fn ensure_channel(&mut self, event: &str) -> &mut Channel<P> {
        let pos = match self.channels.iter().position(|c| c.name.as_ref() == event) {
            Some(pos) => pos,
            None => {
                self.channels.push(Channel::new(Arc::from(event)));
                self.channels.len() - 1
            }
        };
        &mut self.channels[pos]
    }

    fn channel(&self, event: &str) -> Option<&Channel<P>> {
        self.channels.iter().find(|c| c.name.as_ref() == event)
    }

    fn channel_mut(&mut self, event: &str) -> Option<&mut Channel<P>> {
        self.channels.iter_mut().find(|c| c.name.as_ref() == event)
    }

    fn validate(event: &str, listener: &ListenerId) -> Result<()> {
        if event.is_empty() {
            return Err(Error::EmptyEventName);
        }
        if listener.name().is_empty() {
            return Err(Error::EmptyListenerName);
        }
        Ok(())
    }
}

impl<P> Default for EventHub<P> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
