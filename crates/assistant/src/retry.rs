//! Generic retry-with-backoff combinator
//!
//! A [`RetryPolicy`] wraps any fallible async operation, independent of what
//! the operation does. Waits grow exponentially from `base_delay` by
//! `backoff_factor`, are capped at `max_delay`, and carry a uniform jitter
//! of up to `delay * jitter` on top.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::warn;

use hintbench_core::config::RetryConfig;

use crate::error::{AssistantError, Result};

/// Retry policy: exponential backoff with a cap and uniform jitter
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first
    pub max_attempts: usize,
    /// Wait before the first retry
    pub base_delay: Duration,
    /// Multiplicative growth of the wait per retry
    pub backoff_factor: f64,
    /// Cap on the wait between retries
    pub max_delay: Duration,
    /// Jitter fraction added on top of each wait (0.0 disables)
    pub jitter: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(1),
            backoff_factor: 2.0,
            max_delay: Duration::from_secs(60),
            jitter: 0.1,
        }
    }
}

impl RetryPolicy {
    /// Build a policy from configuration, rejecting out-of-range values
    pub fn from_config(config: &RetryConfig) -> Result<Self> {
        if config.max_attempts == 0 {
            return Err(AssistantError::Config(
                "retry max_attempts must be greater than 0".to_string(),
            ));
        }
        if config.backoff_factor < 1.0 {
            return Err(AssistantError::Config(format!(
                "retry backoff_factor must be at least 1.0 (got {})",
                config.backoff_factor
            )));
        }
        if !(0.0..=1.0).contains(&config.jitter) {
            return Err(AssistantError::Config(format!(
                "retry jitter must be between 0.0 and 1.0 (got {})",
                config.jitter
            )));
        }
        Ok(Self {
            max_attempts: config.max_attempts,
            base_delay: Duration::from_millis(config.base_delay_ms),
            backoff_factor: config.backoff_factor,
            max_delay: Duration::from_millis(config.max_delay_ms),
            jitter: config.jitter,
        })
    }

    /// Backoff before retry number `attempt` (1-indexed), jitter excluded
    fn backoff(&self, attempt: usize) -> Duration {
        let factor = self.backoff_factor.powi(attempt.saturating_sub(1) as i32);
        let secs = (self.base_delay.as_secs_f64() * factor).min(self.max_delay.as_secs_f64());
        Duration::from_secs_f64(secs)
    }

    /// Full wait before retry number `attempt`, jitter included
    fn delay_for(&self, attempt: usize) -> Duration {
        let delay = self.backoff(attempt);
        if self.jitter <= 0.0 {
            return delay;
        }
        let extra = rand::thread_rng().gen_range(0.0..=delay.as_secs_f64() * self.jitter);
        delay + Duration::from_secs_f64(extra)
    }
}

/// Run `op` under the policy, retrying errors `is_retryable` accepts.
///
/// Returns the first success, the first non-retryable error unchanged, or
/// the final error once attempts are exhausted.
pub async fn retry<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut is_retryable: impl FnMut(&E) -> bool,
    mut op: F,
) -> std::result::Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < policy.max_attempts && is_retryable(&e) => {
                let delay = policy.delay_for(attempt);
                warn!(
                    "Attempt {attempt}/{} failed: {e}; retrying in {delay:?}",
                    policy.max_attempts
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
