use crate::{Delivery, EventHub, HandlerResult, ListenerId, Receipt, Result};

/// Gives a host type the full hub surface by delegation.
///
/// Implement the two accessors for a type embedding an [`EventHub`], and the
/// provided methods expose registration, mute control and sending directly
/// on the host. This is the composition counterpart of subclassing a
/// subject: collaborators talk to the host, not to the hub field.
///
/// # Examples
///
/// ```rust
/// use murmur::{EventHub, Observable};
///
/// struct Clock {
///     hub: EventHub<u64>,
/// }
///
/// impl Observable for Clock {
///     type Payload = u64;
///
///     fn hub(&self) -> &EventHub<u64> {
///         &self.hub
///     }
///
///     fn hub_mut(&mut self) -> &mut EventHub<u64> {
///         &mut self.hub
///     }
/// }
///
/// let mut clock = Clock { hub: EventHub::default() };
/// clock.register_listener("tick", "display", |_: &u64| Ok(()))?;
/// let receipt = clock.send_messages("tick", &42)?;
/// assert_eq!(receipt.notified_count(), 1);
/// # Ok::<(), murmur::Error>(())
/// ```
pub trait Observable {
    type Payload;

    fn hub(&self) -> &EventHub<Self::Payload>;

    fn hub_mut(&mut self) -> &mut EventHub<Self::Payload>;

    /// See [`EventHub::register_listener`].
    fn register_listener<L, H>(&mut self, event: &str, listener: L, handler: H) -> Result<()>
    where
        L: Into<ListenerId>,
        H: FnMut(&Self::Payload) -> HandlerResult + 'static,
    {
        self.hub_mut().register_listener(event, listener, handler)
    }

    /// See [`EventHub::replace_listener`].
    fn replace_listener<L, H>(&mut self, event: &str, listener: L, handler: H) -> Result<()>
    where
        L: Into<ListenerId>,
        H: FnMut(&Self::Payload) -> HandlerResult + 'static,
    {
        self.hub_mut().replace_listener(event, listener, handler)
    }

    /// See [`EventHub::mute_listener`].
    fn mute_listener<L: Into<ListenerId>>(&mut self, event: &str, listener: L) -> Result<()> {
        self.hub_mut().mute_listener(event, listener)
    }

    /// See [`EventHub::unmute_listener`].
    fn unmute_listener<L: Into<ListenerId>>(&mut self, event: &str, listener: L) -> Result<()> {
        self.hub_mut().unmute_listener(event, listener)
    }

    /// See [`EventHub::destroy_listener`].
    fn destroy_listener<L: Into<ListenerId>>(&mut self, event: &str, listener: L) -> Result<()> {
        self.hub_mut().destroy_listener(event, listener)
    }

    /// See [`EventHub::mute_event`].
    fn mute_event(&mut self, event: &str) -> Result<()> {
        self.hub_mut().mute_event(event)
    }

    /// See [`EventHub::unmute_event`].
    fn unmute_event(&mut self, event: &str) -> Result<()> {
        self.hub_mut().unmute_event(event)
    }

    /// See [`EventHub::destroy_event`].
    fn destroy_event(&mut self, event: &str) -> Result<()> {
        self.hub_mut().destroy_event(event)
    }

    /// See [`EventHub::send_whisper`].
    fn send_whisper<L: Into<ListenerId>>(
        &mut self,
        event: &str,
        listener: L,
        payload: &Self::Payload,
    ) -> Result<Delivery> {
        self.hub_mut().send_whisper(event, listener, payload)
    }

    /// See [`EventHub::send_messages`].
    fn send_messages(&mut self, event: &str, payload: &Self::Payload) -> Result<Receipt> {
        self.hub_mut().send_messages(event, payload)
    }
}
