//! Retry Policy
//!
//! Backoff decorator for fallible async operations. Retries only on
//! rate-limit failures, waiting according to a fixed delay schedule indexed
//! by attempt number. Knows nothing about the operation it wraps and
//! mutates no shared state.

use std::future::Future;
use std::time::Duration;

use crate::error::{Result, SeoError};

/// Ordered backoff schedule; attempt ceiling = schedule length.
///
/// The default matches the product's shipped schedule: three attempts with
/// 1s and 2s waits between them (the final entry is never slept, since the
/// last attempt's failure propagates instead).
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    delays: Vec<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(vec![
            Duration::from_secs(1),
            Duration::from_secs(2),
            Duration::from_secs(4),
        ])
    }
}

impl RetryPolicy {
    /// Create a policy with a custom schedule. Any shape works — a caller
    /// wanting exponential backoff with jitter precomputes the sequence.
    pub fn new(delays: Vec<Duration>) -> Self {
        Self { delays }
    }

    /// Maximum number of attempts, including the first try
    pub fn max_attempts(&self) -> usize {
        self.delays.len()
    }

    /// Execute `op` up to `max_attempts()` times.
    ///
    /// Success returns immediately. A retryable failure with attempts
    /// remaining sleeps `delays[attempt]` and tries again. Any other
    /// failure, including the final attempt's, propagates as-is.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let attempts = self.delays.len();

        for (attempt, delay) in self.delays.iter().enumerate() {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt + 1 < attempts => {
                    tracing::debug!(
                        attempt = attempt + 1,
                        wait_ms = delay.as_millis() as u64,
                        "rate limited, backing off"
                    );
                    tokio::time::sleep(*delay).await;
                }
                Err(err) => return Err(err),
            }
        }

        // Only reachable with an empty schedule
        Err(SeoError::RetriesExhausted(attempts))
    }
}
