//! 重试封装：指数退避下的远端调用重试，区分瞬时与终态失败。
//!
//! # Retrying Call Wrapper
//!
//! [`with_retry`] executes a caller-supplied asynchronous operation,
//! masking transient failures up to a bounded attempt count with
//! geometric backoff between attempts. Failures are classified, not just
//! caught: terminal errors (configuration, validation, malformed
//! payloads, non-retryable remote classes) re-raise immediately
//! regardless of remaining budget, and the final error always surfaces
//! unchanged — no wrapping, no swallowing.
//!
//! The loop is deliberately iterative with an explicit attempt counter;
//! the delay for retry *n* (0-based) is `initial_delay × multiplier^n`,
//! clamped to `max_delay`, unless the server suggested its own wait via
//! `Retry-After`.

use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::Result;

/// Backoff schedule for one call chain.
///
/// Stateless and `Clone`; the wrapper copies it per invocation, so
/// concurrent call chains never share mutable state.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt; an always-failing operation is
    /// invoked `1 + max_retries` times.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub multiplier: f64,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(500),
            multiplier: 2.0,
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// No retries: the first failure is final.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before retry `n` (0-based), before the `max_delay` clamp is
    /// applied to server-suggested waits.
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = self.multiplier.max(1.0).powi(retry as i32);
        let millis = (self.initial_delay.as_millis() as f64 * factor) as u64;
        Duration::from_millis(millis).min(self.max_delay)
    }
}

/// Run `operation`, retrying transient failures per `policy`.
///
/// The operation is a closure returning a fresh future per attempt. On
/// success the result returns immediately; on a terminal failure or an
/// exhausted budget the underlying error re-raises as-is.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt: u32 = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !err.is_retryable() || attempt >= policy.max_retries {
                    return Err(err);
                }
                let delay = err
                    .retry_after()
                    .map(|suggested| suggested.min(policy.max_delay))
                    .unwrap_or_else(|| policy.delay_for(attempt));
                debug!(
                    attempt = attempt + 1,
                    max_retries = policy.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "transient failure, backing off"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
