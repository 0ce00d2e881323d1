use crate::error::{Error, Result};
use crate::retry::RetryPolicy;
use std::future::Future;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Runs `attempt_fn` until it succeeds, the policy refuses another attempt or
/// `cancel` fires.
///
/// `attempt_fn` receives the attempt number, starting at 1. Attempts never
/// overlap. Between attempts the task sleeps for the policy's backoff. When
/// the loop gives up the error of the last attempt is returned unchanged.
pub async fn retry_loop<F, Fut, T>(
    policy: &RetryPolicy,
    cancel: Option<&CancellationToken>,
    mut attempt_fn: F,
) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let start = Instant::now();
    let mut attempt = 1;
    loop {
        if cancel.map_or(false, |c| c.is_cancelled()) {
            return Err(Error::Cancelled);
        }
        log::debug!("Starting attempt {} of {}", attempt, policy.max_attempts());
        let error = match attempt_fn(attempt).await {
            Ok(r) => return Ok(r),
            Err(e) => e,
        };
        if attempt >= policy.max_attempts() || !policy.should_retry(&error) {
            return Err(error);
        }
        let delay = policy.delay(attempt);
        if let Some(max_elapsed) = policy.max_elapsed() {
            let overruns = start
                .elapsed()
                .checked_add(delay)
                .map_or(true, |t| t > max_elapsed);
            if overruns {
                log::debug!("Retry budget of {:?} exhausted", max_elapsed);
                return Err(error);
            }
        }
        log::warn!(
            "Attempt {} failed, retrying in {:?}: {}",
            attempt,
            delay,
            error
        );
        match cancel {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => return Err(Error::Cancelled),
                    _ = tokio::time::sleep(delay) => {}
                }
            }
            None => tokio::time::sleep(delay).await,
        }
        attempt += 1;
    }
}
