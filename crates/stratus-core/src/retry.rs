//! Retry backoff for transient transport failures.
//!
//! [`ExponentialBackoff`] computes the delay schedule and [`retry_with`] drives
//! an async operation against it, consulting a caller-supplied predicate to
//! decide whether a failure is worth another attempt. [`retry_with_policy`]
//! also lets the failure choose its own delay.
//!
//! ```rust
//! use stratus_core::retry::{retry_with, ExponentialBackoff};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), std::io::Error> {
//! let backoff = ExponentialBackoff::builder()
//!     .max_retries(2)
//!     .initial_delay(Duration::from_millis(10))
//!     .build();
//!
//! let value = retry_with(&backoff, |_attempt| async { Ok::<_, std::io::Error>(7) }, |_| true).await?;
//! assert_eq!(value, 7);
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::time::Duration;

/// A delay schedule for retrying failed calls.
pub trait BackoffStrategy: Send + Sync {
    /// Delay to wait after failed attempt `attempt` (0-indexed).
    ///
    /// `None` stops retrying regardless of [`max_retries`](Self::max_retries).
    fn next_delay(&self, attempt: u32) -> Option<Duration>;

    /// Number of retries allowed after the initial attempt.
    fn max_retries(&self) -> u32;
}

/// What to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Return the error.
    Stop,
    /// Retry after the strategy's delay.
    Backoff,
    /// Retry after this delay, which the failure itself asked for.
    After(Duration),
}

/// Runs `operation` until it succeeds, `retryable` rejects the error, or the
/// strategy's retries are used up.
///
/// The closure receives the attempt number, starting at 0. The last error is
/// returned unchanged.
pub async fn retry_with<S, F, Fut, T, E, P>(
    strategy: &S,
    operation: F,
    retryable: P,
) -> Result<T, E>
where
    S: BackoffStrategy + ?Sized,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
{
    retry_with_policy(strategy, operation, |err| {
        if retryable(err) {
            RetryDecision::Backoff
        } else {
            RetryDecision::Stop
        }
    })
    .await
}

/// Like [`retry_with`], but `decide` may also name the delay before the next
/// attempt, e.g. from a `Retry-After` header.
pub async fn retry_with_policy<S, F, Fut, T, E, D>(
    strategy: &S,
    mut operation: F,
    decide: D,
) -> Result<T, E>
where
    S: BackoffStrategy + ?Sized,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    D: Fn(&E) -> RetryDecision,
{
    let mut attempt = 0;
    loop {
        let err = match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= strategy.max_retries() => return Err(err),
            Err(err) => err,
        };
        let delay = match decide(&err) {
            RetryDecision::Stop => return Err(err),
            RetryDecision::After(delay) => delay,
            RetryDecision::Backoff => match strategy.next_delay(attempt) {
                Some(delay) => delay,
                None => return Err(err),
            },
        };
        tracing::debug!(attempt, ?delay, "retrying after transient failure");
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

/// Exponential backoff with proportional jitter.
///
/// The delay after attempt `n` is `initial_delay * multiplier^n`, perturbed by
/// up to `jitter` of itself in either direction and capped at `max_delay`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialBackoff {
    max_retries: u32,
    initial_delay: Duration,
    max_delay: Duration,
    multiplier: f64,
    jitter: f64,
}

impl ExponentialBackoff {
    /// Start configuring a backoff.
    pub fn builder() -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::default()
    }

    /// The same schedule with a different retry ceiling.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

impl Default for ExponentialBackoff {
    /// 3 retries, 100ms initial delay doubling up to 20s, 10% jitter.
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(20),
            multiplier: 2.0,
            jitter: 0.1,
        }
    }
}

impl BackoffStrategy for ExponentialBackoff {
    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        let base = self.initial_delay.as_secs_f64() * self.multiplier.powi(attempt as i32);
        let spread = if self.jitter > 0.0 {
            base * self.jitter * (rand::random::<f64>() * 2.0 - 1.0)
        } else {
            0.0
        };
        let secs = (base + spread).clamp(0.0, self.max_delay.as_secs_f64());
        Some(Duration::from_secs_f64(secs))
    }

    fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

/// Builder for [`ExponentialBackoff`]; unset values take the defaults.
#[derive(Debug, Default)]
pub struct ExponentialBackoffBuilder {
    max_retries: Option<u32>,
    initial_delay: Option<Duration>,
    max_delay: Option<Duration>,
    multiplier: Option<f64>,
    jitter: Option<f64>,
}

impl ExponentialBackoffBuilder {
    /// Retries after the initial attempt.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Delay after the first failure.
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = Some(delay);
        self
    }

    /// Upper bound for any single delay.
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = Some(delay);
        self
    }

    /// Growth factor between attempts.
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Jitter fraction, clamped to `0.0..=1.0`.
    pub fn jitter(mut self, jitter: f64) -> Self {
        self.jitter = Some(jitter.clamp(0.0, 1.0));
        self
    }

    /// Finish the backoff.
    pub fn build(self) -> ExponentialBackoff {
        let defaults = ExponentialBackoff::default();
        ExponentialBackoff {
            max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            initial_delay: self.initial_delay.unwrap_or(defaults.initial_delay),
            max_delay: self.max_delay.unwrap_or(defaults.max_delay),
            multiplier: self.multiplier.unwrap_or(defaults.multiplier),
            jitter: self.jitter.unwrap_or(defaults.jitter),
        }
    }
}
