//! Per-call request options.

use crate::retry::RetrySetting;
use tokio_util::sync::CancellationToken;

/// Options applied to a single call, on top of the client configuration.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    retry: RetrySetting,
    retry_token: Option<String>,
    request_id: Option<String>,
    if_match: Option<String>,
    cancellation: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the client retry policy for this call.
    ///
    /// Accepts a `RetryPolicy`, a `RetrySetting`, or `None::<RetryPolicy>` to
    /// disable retries.
    pub fn with_retry<V: Into<RetrySetting>>(mut self, v: V) -> Self {
        self.retry = v.into();
        self
    }

    /// Use this token instead of generating one for mutating requests.
    pub fn with_retry_token<S: Into<String>>(mut self, v: S) -> Self {
        self.retry_token = Some(v.into());
        self
    }

    /// Sent as `opc-request-id`.
    pub fn with_request_id<S: Into<String>>(mut self, v: S) -> Self {
        self.request_id = Some(v.into());
        self
    }

    /// Sent as `if-match`, for optimistic concurrency on updates and deletes.
    pub fn with_if_match<S: Into<String>>(mut self, v: S) -> Self {
        self.if_match = Some(v.into());
        self
    }

    pub fn with_cancellation(mut self, v: CancellationToken) -> Self {
        self.cancellation = Some(v);
        self
    }

    pub fn retry(&self) -> &RetrySetting {
        &self.retry
    }

    pub fn retry_token(&self) -> Option<&str> {
        self.retry_token.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn if_match(&self) -> Option<&str> {
        self.if_match.as_deref()
    }

    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }
}
