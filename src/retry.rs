//! Retry policies and their per-call resolution.
//!
//! A [RetryPolicy] bundles the attempt limit, the predicate deciding which
//! failures are worth another attempt and the [Backoff] used between
//! attempts. Policies are set once on the client and can be replaced or
//! disabled for a single call through a [RetrySetting].

use crate::backoff::{Backoff, ExponentialBackoff};
use crate::error::Error;
use reqwest::StatusCode;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Decides whether a failed attempt may be retried.
pub trait RetryCondition: Send + Sync {
    fn should_retry(&self, error: &Error) -> bool;
}

impl<F> RetryCondition for F
where
    F: Fn(&Error) -> bool + Send + Sync,
{
    fn should_retry(&self, error: &Error) -> bool {
        self(error)
    }
}

/// Retries transport failures, `429 Too Many Requests` and every `5xx`
/// except `501 Not Implemented`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultRetryCondition;

impl RetryCondition for DefaultRetryCondition {
    fn should_retry(&self, error: &Error) -> bool {
        if error.is_transport() {
            return true;
        }
        match error.status() {
            Some(StatusCode::TOO_MANY_REQUESTS) => true,
            Some(StatusCode::NOT_IMPLEMENTED) => false,
            Some(status) => status.is_server_error(),
            None => false,
        }
    }
}

/// Retries an explicit set of statuses.
#[derive(Clone, Debug, Default)]
pub struct RetryOnStatus {
    statuses: Vec<StatusCode>,
    transport: bool,
}

impl RetryOnStatus {
    pub fn new<I: IntoIterator<Item = StatusCode>>(statuses: I) -> Self {
        Self {
            statuses: statuses.into_iter().collect(),
            transport: false,
        }
    }

    /// Also retry failures where no response was received.
    pub fn with_transport_errors(mut self, v: bool) -> Self {
        self.transport = v;
        self
    }
}

impl RetryCondition for RetryOnStatus {
    fn should_retry(&self, error: &Error) -> bool {
        if error.is_transport() {
            return self.transport;
        }
        error
            .status()
            .map(|status| self.statuses.contains(&status))
            .unwrap_or(false)
    }
}

/// Retry behavior for one call.
///
/// Cloning is cheap, the condition and backoff are shared.
#[derive(Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    condition: Arc<dyn RetryCondition>,
    backoff: Arc<dyn Backoff>,
    max_elapsed: Option<Duration>,
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    pub fn none() -> Self {
        Self::new(1)
    }

    /// A policy allowing `max_attempts` attempts in total, including the
    /// first, with the default condition and backoff. Zero is treated as one.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            condition: Arc::new(DefaultRetryCondition),
            backoff: Arc::new(ExponentialBackoff::default()),
            max_elapsed: None,
        }
    }

    pub fn with_max_attempts(mut self, v: u32) -> Self {
        self.max_attempts = v.max(1);
        self
    }

    pub fn with_condition<C: RetryCondition + 'static>(mut self, v: C) -> Self {
        self.condition = Arc::new(v);
        self
    }

    pub fn with_backoff<B: Backoff + 'static>(mut self, v: B) -> Self {
        self.backoff = Arc::new(v);
        self
    }

    /// Stop retrying once the next backoff would take the call past `v`.
    pub fn with_max_elapsed(mut self, v: Duration) -> Self {
        self.max_elapsed = Some(v);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn max_elapsed(&self) -> Option<Duration> {
        self.max_elapsed
    }

    /// Returns `true` if the policy never makes a second attempt.
    pub fn is_passthrough(&self) -> bool {
        self.max_attempts == 1
    }

    pub fn should_retry(&self, error: &Error) -> bool {
        match error {
            Error::MissingParameter(_) | Error::Cancelled => false,
            _ => self.condition.should_retry(error),
        }
    }

    pub fn delay(&self, attempt: u32) -> Duration {
        self.backoff.delay(attempt)
    }

    pub(crate) fn same_as(&self, other: &RetryPolicy) -> bool {
        self.max_attempts == other.max_attempts
            && self.max_elapsed == other.max_elapsed
            && Arc::ptr_eq(&self.condition, &other.condition)
            && Arc::ptr_eq(&self.backoff, &other.backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(8).with_max_elapsed(Duration::from_secs(600))
    }
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .field("max_elapsed", &self.max_elapsed)
            .finish_non_exhaustive()
    }
}

/// The per-call retry override.
///
/// `Default` defers to the client, `Disabled` forces a single attempt even if
/// the client would retry, and `Override` replaces the client policy.
#[derive(Clone, Debug, Default)]
pub enum RetrySetting {
    #[default]
    Default,
    Disabled,
    Override(RetryPolicy),
}

impl RetrySetting {
    /// Returns the policy in effect for a call.
    pub fn resolve(&self, client_default: Option<&RetryPolicy>) -> RetryPolicy {
        match self {
            RetrySetting::Default => client_default.cloned().unwrap_or_else(RetryPolicy::none),
            RetrySetting::Disabled => RetryPolicy::none(),
            RetrySetting::Override(policy) => policy.clone(),
        }
    }
}

impl From<RetryPolicy> for RetrySetting {
    fn from(policy: RetryPolicy) -> Self {
        RetrySetting::Override(policy)
    }
}

/// An explicit `None` disables retries, it does not fall back to the client.
impl From<Option<RetryPolicy>> for RetrySetting {
    fn from(policy: Option<RetryPolicy>) -> Self {
        match policy {
            Some(policy) => RetrySetting::Override(policy),
            None => RetrySetting::Disabled,
        }
    }
}
