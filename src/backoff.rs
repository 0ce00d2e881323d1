//! Backoff strategies used between retry attempts.
//!
//! A [Backoff] maps the number of attempts made so far to the time to wait
//! before the next one. [ExponentialBackoff] is the usual choice for calls
//! against a remote service, [FixedBackoff] is mostly useful in tests.

use rand::Rng;
use std::time::Duration;

/// Trait implemented by all backoff strategies.
pub trait Backoff: Send + Sync {
    /// Returns the delay to wait after `attempt` failed. `attempt` starts at 1.
    fn delay(&self, attempt: u32) -> Duration;
}

impl<F> Backoff for F
where
    F: Fn(u32) -> Duration + Send + Sync,
{
    fn delay(&self, attempt: u32) -> Duration {
        self(attempt)
    }
}

/// The error type for exponential backoff creation.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("the scaling value ({0}) should be >= 1.0")]
    InvalidScalingFactor(f64),
    #[error("the initial delay ({0:?}) should be greater than zero")]
    InvalidInitialDelay(Duration),
    #[error("the maximum delay ({maximum:?}) should be >= the initial delay ({initial:?})")]
    EmptyRange {
        maximum: Duration,
        initial: Duration,
    },
}

#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
    jitter: bool,
}

impl ExponentialBackoffBuilder {
    pub fn new() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            maximum_delay: Duration::from_secs(30),
            scaling: 2.0,
            jitter: true,
        }
    }

    pub fn with_initial_delay(mut self, v: Duration) -> Self {
        self.initial_delay = v;
        self
    }

    pub fn with_maximum_delay(mut self, v: Duration) -> Self {
        self.maximum_delay = v;
        self
    }

    pub fn with_scaling(mut self, v: f64) -> Self {
        self.scaling = v;
        self
    }

    /// Enable or disable jitter. With jitter the delay is drawn uniformly
    /// from the upper half of the exponential delay.
    pub fn with_jitter(mut self, v: bool) -> Self {
        self.jitter = v;
        self
    }

    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.scaling.is_nan() || self.scaling < 1.0 {
            return Err(Error::InvalidScalingFactor(self.scaling));
        }
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            initial_delay: self.initial_delay,
            maximum_delay: self.maximum_delay,
            scaling: self.scaling,
            jitter: self.jitter,
        })
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncated exponential backoff, optionally with jitter.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
    jitter: bool,
}

impl ExponentialBackoff {
    pub fn builder() -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::new()
    }

    /// The delay before jitter is applied.
    pub fn base_delay(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let scaling = self.scaling.powi(exp);
        let limit = self.maximum_delay.as_secs_f64() / self.initial_delay.as_secs_f64();
        if scaling >= limit {
            self.maximum_delay
        } else {
            self.initial_delay.mul_f64(scaling)
        }
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            maximum_delay: Duration::from_secs(30),
            scaling: 2.0,
            jitter: true,
        }
    }
}

impl Backoff for ExponentialBackoff {
    fn delay(&self, attempt: u32) -> Duration {
        let delay = self.base_delay(attempt);
        if !self.jitter {
            return delay;
        }
        let half = delay / 2;
        let spread = (delay - half).as_nanos() as u64;
        half + Duration::from_nanos(rand::thread_rng().gen_range(0..=spread))
    }
}

/// Waits the same amount of time after every failed attempt.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedBackoff(pub Duration);

impl FixedBackoff {
    /// Retry immediately.
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }
}

impl Backoff for FixedBackoff {
    fn delay(&self, _attempt: u32) -> Duration {
        self.0
    }
}
