//! Fixed-delay retry loop.
//!
//! Every attempt is followed, on a retryable failure, by the same delay.
//! There is no exponential growth and no jitter.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, warn};

use crate::core::config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY};
use crate::errors::SummaryError;

type Predicate<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// Attempt count, delay, and the predicate deciding whether a failure is
/// worth another attempt.
pub struct RetryPolicy<E = SummaryError> {
    max_attempts: u32,
    delay: Duration,
    predicate: Predicate<E>,
}

impl<E> RetryPolicy<E> {
    pub fn with_predicate<P>(max_attempts: u32, delay: Duration, predicate: P) -> Self
    where
        P: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
            predicate: Arc::new(predicate),
        }
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn should_retry(&self, error: &E) -> bool {
        (self.predicate)(error)
    }
}

impl RetryPolicy<SummaryError> {
    /// Policy using the default classifier: transport, format and contract
    /// failures plus HTTP 404 are retried; other statuses are not.
    #[must_use]
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self::with_predicate(max_attempts, delay, |e| is_retryable(e, false))
    }

    /// Replaces the predicate with the default classifier, optionally
    /// treating 5xx responses as retryable.
    #[must_use]
    pub fn retry_server_errors(self, enabled: bool) -> Self {
        Self::with_predicate(self.max_attempts, self.delay, move |e| {
            is_retryable(e, enabled)
        })
    }
}

impl Default for RetryPolicy<SummaryError> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}

impl<E> Clone for RetryPolicy<E> {
    fn clone(&self) -> Self {
        Self {
            max_attempts: self.max_attempts,
            delay: self.delay,
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<E> fmt::Debug for RetryPolicy<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

#[must_use]
pub fn is_retryable(error: &SummaryError, retry_server_errors: bool) -> bool {
    match error {
        SummaryError::Transport(_) | SummaryError::Format(_) | SummaryError::Contract(_) => true,
        SummaryError::Http { status: 404, .. } => true,
        SummaryError::Http { status, .. } => retry_server_errors && (500..600).contains(status),
        SummaryError::InvalidRequest(_) => false,
    }
}

/// Runs `operation` until it succeeds, the predicate rejects an error, or
/// `max_attempts` tries have been made. The last error is returned.
pub async fn with_retry<F, Fut, T, E>(policy: &RetryPolicy<E>, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let max_attempts = policy.max_attempts;
    let strategy = FixedInterval::new(policy.delay).take(max_attempts.saturating_sub(1) as usize);
    let attempt = AtomicU32::new(0);

    RetryIf::spawn(
        strategy,
        || {
            let n = attempt.fetch_add(1, Ordering::SeqCst) + 1;
            debug!(attempt = n, max_attempts, "Starting attempt");
            operation()
        },
        |error: &E| {
            let n = attempt.load(Ordering::SeqCst);
            if !policy.should_retry(error) {
                debug!(attempt = n, "Error is not retryable: {}", error);
                return false;
            }
            if n >= max_attempts {
                warn!(attempt = n, max_attempts, "Attempts exhausted: {}", error);
            } else {
                warn!(
                    attempt = n,
                    max_attempts,
                    delay_ms = policy.delay.as_millis() as u64,
                    "Attempt failed, retrying: {}",
                    error
                );
            }
            true
        },
    )
    .await
}
