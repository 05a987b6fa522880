use crate::FailurePolicy;

/// Configuration for an event hub.
///
/// Use the builder pattern to customize, or [`Default`] for the defaults.
///
/// # Examples
///
/// ```rust
/// use murmur::{Config, FailurePolicy};
///
/// let config = Config::default().with_failure_policy(FailurePolicy::CollectAll);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Policy applied when a handler fails during a broadcast.
    /// Default: fail fast (the first failure aborts the remaining deliveries).
    pub failure_policy: FailurePolicy,
}

impl Config {
    /// Set the policy applied to handler failures during a broadcast.
    ///
    /// Trade-offs:
    /// - `FailFast`: the caller learns about a failure as early as possible,
    ///   but listeners after the failing one are not notified.
    /// - `CollectAll`: every healthy listener is still notified, and all
    ///   failures are reported together once the loop has finished.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
