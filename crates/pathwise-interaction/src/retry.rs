//! Retry policy for generator calls.
//!
//! A small value object: how many attempts, and how long to wait between
//! them. Only errors the generator marks retryable are retried; anything
//! else surfaces immediately.

use crate::GeneratorError;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Delay strategy between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// The same delay before every retry.
    Fixed(Duration),
    /// The delay doubles after each failed attempt.
    Exponential(Duration),
}

impl Backoff {
    /// Delay before retry number `retry` (0-based).
    fn delay(&self, retry: u32) -> Duration {
        match self {
            Self::Fixed(base) => *base,
            Self::Exponential(base) => base.saturating_mul(2u32.saturating_pow(retry)),
        }
    }
}

/// How persistently to call the generator before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            backoff: Backoff::Fixed(Duration::from_millis(500)),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given attempt budget and backoff.
    /// `max_attempts` counts the initial call, so it is clamped to at
    /// least 1.
    pub fn new(max_attempts: u32, backoff: Backoff) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Total attempts this policy allows, including the first.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Runs `operation` up to `max_attempts` times, sleeping between
    /// attempts. Non-retryable errors return immediately.
    pub async fn run<F, Fut, T>(&self, mut operation: F) -> Result<T, GeneratorError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, GeneratorError>>,
    {
        let mut attempt = 0u32;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt + 1 < self.max_attempts => {
                    let delay = self.backoff.delay(attempt);
                    warn!(
                        attempt = attempt + 1,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "generator call failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn transient(message: &str) -> GeneratorError {
        GeneratorError::Process {
            status_code: Some(503),
            message: message.to_string(),
            is_retryable: true,
        }
    }

    fn permanent(message: &str) -> GeneratorError {
        GeneratorError::Configuration(message.to_string())
    }

    #[tokio::test]
    async fn test_succeeds_after_transient_failure() {
        let policy = RetryPolicy::new(3, Backoff::Fixed(Duration::from_millis(1)));
        let calls = AtomicU32::new(0);

        let result = policy
            .run(|| {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        Err(transient("first call fails"))
                    } else {
                        Ok("recovered".to_string())
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "recovered");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_non_retryable_fails_immediately() {
        let policy = RetryPolicy::new(3, Backoff::Fixed(Duration::from_millis(1)));
        let calls = AtomicU32::new(0);

        let result: Result<(), _> = policy
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(permanent("missing key")) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_exhausts_attempt_budget() {
        let policy = RetryPolicy::new(2, Backoff::Fixed(Duration::from_millis(1)));
        let calls = AtomicU32::new(0);

        let result: Result<(), _> = policy
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(transient("still down")) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 2);
        assert_eq!(
            policy,
            RetryPolicy::new(2, Backoff::Fixed(Duration::from_millis(500)))
        );
    }

    #[test]
    fn test_exponential_backoff_doubles() {
        let backoff = Backoff::Exponential(Duration::from_millis(100));
        assert_eq!(backoff.delay(0), Duration::from_millis(100));
        assert_eq!(backoff.delay(1), Duration::from_millis(200));
        assert_eq!(backoff.delay(2), Duration::from_millis(400));
    }

    #[test]
    fn test_zero_attempts_clamped_to_one() {
        let policy = RetryPolicy::new(0, Backoff::Fixed(Duration::from_millis(1)));
        assert_eq!(policy.max_attempts(), 1);
    }
}
