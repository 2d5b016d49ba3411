//! Retry policy shared by the HTTP collaborators.

use crate::error::FetchError;
use backon::{ConstantBuilder, Retryable};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

pub const MAX_ATTEMPTS: usize = 3;
pub const RETRY_DELAY: Duration = Duration::from_secs(2);
pub const RATE_LIMIT_DELAY: Duration = Duration::from_secs(10);

/// Attempts are counted in total, so `max_attempts = 3` means two retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub delay: Duration,
    pub rate_limit_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            delay: RETRY_DELAY,
            rate_limit_delay: RATE_LIMIT_DELAY,
        }
    }
}

impl RetryPolicy {
    fn backoff(&self) -> ConstantBuilder {
        ConstantBuilder::default()
            .with_delay(self.delay)
            .with_max_times(self.max_attempts.saturating_sub(1))
    }

    /// Run `op` until it succeeds, fails with a non-retryable error, or the
    /// attempt budget is spent. A rate-limited attempt waits
    /// `rate_limit_delay` instead of `delay`.
    pub async fn run<T, F, Fut>(&self, label: &str, op: F) -> Result<T, FetchError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let rate_limit_delay = self.rate_limit_delay;
        op.retry(self.backoff())
            .when(FetchError::is_retryable)
            .adjust(move |err: &FetchError, delay: Option<Duration>| {
                if err.is_rate_limited() {
                    delay.map(|_| rate_limit_delay)
                } else {
                    delay
                }
            })
            .notify(|err: &FetchError, delay: Duration| {
                warn!(
                    request = %label,
                    error = %err,
                    delay_ms = delay.as_millis() as u64,
                    "request failed, retrying"
                );
            })
            .await
    }
}
