//! Retry policy for transient failures.
//!
//! The policy is a pure decision function over the immutable retry
//! configuration: given an attempt index and an outcome, decide whether
//! to retry and how long to wait. It holds no state across calls.
//!
//! Eligibility: HTTP 429, any 5xx, and any transport failure. Other 4xx
//! are never retried. Backoff grows exponentially from the configured
//! base delay; a 429 carrying a `Retry-After` hint waits at least as
//! long as the server asked.

use std::time::Duration;

use crate::client::errors::RetryOutcome;
use crate::config::DixaConfig;

/// Exponent cap for backoff growth, to keep the shift well-defined for
/// absurd attempt counts.
const MAX_BACKOFF_EXPONENT: u32 = 16;

/// Pure retry decision policy.
///
/// Owned by the client for its entire lifetime; read-only after
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    retry_delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy from explicit values.
    #[must_use]
    pub const fn new(max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            max_retries,
            retry_delay,
        }
    }

    /// Creates a policy from client configuration.
    #[must_use]
    pub const fn from_config(config: &DixaConfig) -> Self {
        Self::new(config.max_retries(), config.retry_delay())
    }

    /// Returns the configured retry budget.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns `true` if a response status is eligible for retry.
    ///
    /// 429 and 5xx qualify; other 4xx are client errors and retrying
    /// them is futile.
    #[must_use]
    pub const fn eligible_status(code: u16) -> bool {
        code == 429 || (code >= 500 && code <= 599)
    }

    /// Decides whether to retry after the given attempt (1-based).
    ///
    /// Transport failures are always eligible; responses are eligible
    /// per [`Self::eligible_status`]. Returns `false` once the attempt
    /// index exceeds the retry budget.
    #[must_use]
    pub const fn should_retry(&self, attempt: u32, outcome: &RetryOutcome) -> bool {
        let eligible = match outcome.status() {
            Some(code) => Self::eligible_status(code),
            None => true,
        };
        eligible && attempt <= self.max_retries
    }

    /// Returns the backoff delay before the attempt following `attempt`.
    ///
    /// Exponential: `retry_delay * 2^(attempt - 1)`, monotonically
    /// non-decreasing in the attempt index.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(MAX_BACKOFF_EXPONENT);
        self.retry_delay.saturating_mul(1 << exponent)
    }

    /// Returns the backoff delay, honoring a server-provided hint.
    ///
    /// Takes the larger of the computed backoff and the `Retry-After`
    /// value so server guidance is always respected. Hints that cannot
    /// represent a `Duration` (non-finite, negative, or overflowing)
    /// are ignored; a hostile header must not take the operation down.
    #[must_use]
    pub fn delay_with_hint(&self, attempt: u32, retry_after: Option<f64>) -> Duration {
        let computed = self.delay_for(attempt);
        match retry_after.and_then(|seconds| Duration::try_from_secs_f64(seconds).ok()) {
            Some(hint) => computed.max(hint),
            None => computed,
        }
    }
}
