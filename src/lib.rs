//! Murmur - Synchronous publish/subscribe hub
//!
//! A small event hub that lets any type notify named listeners about
//! domain events, with per-listener and per-event muting and unicast
//! "whispers" alongside regular broadcasts.
//!
//! See `demos/tick.rs`.

mod config;
mod delivery;
mod error;
mod event_hub;
mod failure_policy;
mod handler;
mod listener_id;
mod observable;
mod receipt;

mod internal;

pub use config::Config;
pub use delivery::Delivery;
pub use error::{BoxError, Error};
pub use event_hub::EventHub;
pub use failure_policy::FailurePolicy;
pub use handler::{Handler, HandlerResult};
pub use listener_id::ListenerId;
pub use observable::Observable;
pub use receipt::Receipt;

pub type Result<T = ()> = std::result::Result<T, Error>;
pub type DispatchId = u128;
