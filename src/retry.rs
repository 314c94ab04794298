//! Retry policy for requests made by [`ProcessClient`](crate::client::ProcessClient).
//!
//! Whether a failure is worth another attempt is decided by
//! [`ClientError::is_retryable`]: transport errors and 5xx responses are
//! retried with a doubling delay, a rejected request (4xx) is returned at once.

use crate::client::ClientError;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// How often, and how patiently, a request is repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first one included. Zero behaves like one.
    pub attempts: u32,
    /// Wait before the second attempt; doubled for every attempt after that
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: u32, initial_delay: Duration) -> Self {
        Self {
            attempts,
            initial_delay,
            max_delay: Duration::from_secs(30),
        }
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Waiting for a server that may still be starting up.
    /// Delays: 500ms, 1s, 2s
    pub fn health_check() -> Self {
        Self::new(4, Duration::from_millis(500)).with_max_delay(Duration::from_secs(2))
    }

    /// A single `POST /api/process`. Delays: 1s, 2s
    pub fn process() -> Self {
        Self::new(3, Duration::from_secs(1)).with_max_delay(Duration::from_secs(5))
    }

    /// Wait after the given failed attempt (1-based).
    fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.saturating_sub(1).min(16);
        self.initial_delay
            .saturating_mul(factor)
            .min(self.max_delay)
    }

    /// Run `request` until it succeeds, fails with a non-retryable error, or
    /// the attempts are used up. The last error is returned in the latter
    /// two cases.
    pub async fn run<T, F, Fut>(&self, what: &str, mut request: F) -> Result<T, ClientError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let mut attempt = 1;
        loop {
            let error = match request().await {
                Ok(value) => {
                    if attempt > 1 {
                        debug!("{} succeeded on attempt {}", what, attempt);
                    }
                    return Ok(value);
                }
                Err(error) => error,
            };

            if !error.is_retryable() {
                debug!("{} rejected, not retrying: {}", what, error);
                return Err(error);
            }
            if attempt >= self.attempts {
                warn!("{} failed after {} attempt(s): {}", what, attempt, error);
                return Err(error);
            }

            let delay = self.delay_after(attempt);
            warn!(
                "{} failed on attempt {}/{} ({}), retrying in {:?}",
                what, attempt, self.attempts, error, delay
            );
            sleep(delay).await;
            attempt += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn quick(attempts: u32) -> RetryPolicy {
        RetryPolicy::new(attempts, Duration::from_millis(1))
    }

    fn server_error() -> ClientError {
        ClientError::Server {
            status: 503,
            message: "Service Unavailable".to_string(),
        }
    }

    fn rejected() -> ClientError {
        ClientError::Rejected {
            status: 400,
            message: "No text provided".to_string(),
        }
    }

    // ==================== Delays ====================

    #[test]
    fn test_delay_doubles() {
        let policy = RetryPolicy::new(5, Duration::from_millis(100));
        assert_eq!(policy.delay_after(1), Duration::from_millis(100));
        assert_eq!(policy.delay_after(2), Duration::from_millis(200));
        assert_eq!(policy.delay_after(3), Duration::from_millis(400));
    }

    #[test]
    fn test_delay_is_capped() {
        let policy = RetryPolicy::health_check();
        assert_eq!(policy.delay_after(3), Duration::from_secs(2));
        assert_eq!(policy.delay_after(40), Duration::from_secs(2));
    }

    #[test]
    fn test_presets() {
        assert_eq!(RetryPolicy::health_check().attempts, 4);
        assert_eq!(RetryPolicy::process().attempts, 3);
        assert_eq!(RetryPolicy::process().initial_delay, Duration::from_secs(1));
    }

    // ==================== Running Requests ====================

    #[tokio::test]
    async fn test_server_errors_are_retried_until_success() {
        let calls = AtomicU32::new(0);
        let counter = &calls;

        let result = quick(3)
            .run("Process text", || async move {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(server_error())
                } else {
                    Ok("done")
                }
            })
            .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_last_server_error_is_returned() {
        let calls = AtomicU32::new(0);
        let counter = &calls;

        let result: Result<(), _> = quick(3)
            .run("Process text", || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(server_error())
            })
            .await;

        assert!(matches!(result, Err(ClientError::Server { status: 503, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_rejection_fails_immediately() {
        let calls = AtomicU32::new(0);
        let counter = &calls;

        let result: Result<(), _> = quick(3)
            .run("Process text", || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(rejected())
            })
            .await;

        assert_eq!(result.unwrap_err().to_string(), "No text provided");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_tries_once() {
        let calls = AtomicU32::new(0);
        let counter = &calls;

        let result: Result<(), _> = quick(0)
            .run("Health check", || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(server_error())
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
