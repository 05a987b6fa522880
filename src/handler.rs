use crate::BoxError;

/// Outcome of a single handler invocation.
pub type HandlerResult = std::result::Result<(), BoxError>;

/// Callback invoked with the payload of every message delivered to its
/// listener. Handlers carry their own state through closure capture.
pub type Handler<P> = Box<dyn FnMut(&P) -> HandlerResult>;
