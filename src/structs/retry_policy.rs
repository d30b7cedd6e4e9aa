use std::time::Duration;

use crate::config::constants::DEFAULT_MAX_RETRIES;

/// Explicit retry strategy for the model round-trip.
///
/// The default matches the observed behavior: a fixed attempt budget with
/// immediate re-invocation. A delay can be configured to space attempts out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES)
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            // At least one attempt is always made
            max_attempts: max_attempts.max(1),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay to wait after a failed attempt, or `None` when no further
    /// attempt will be made or the policy retries immediately.
    pub fn delay_before_retry(&self, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_attempts || self.delay.is_zero() {
            return None;
        }
        Some(self.delay)
    }
}
