// ABOUTME: Exponential-backoff policy for throttled (HTTP 429) requests
// ABOUTME: Computes per-attempt delays with jitter and a Retry-After override

use rand::Rng;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::time::Duration;

/// Configuration for the 429 retry behavior.
///
/// Only throttling responses are retried; every other failure is surfaced
/// after a single attempt.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Delay before the attempt following `attempt` (1-based).
    ///
    /// A server-provided `Retry-After` wins over the computed backoff, capped
    /// at `max_delay` so a hostile header cannot stall the workflow.
    pub fn delay_for(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        if let Some(server_delay) = retry_after {
            return server_delay.min(self.max_delay);
        }

        let delay_ms = (self.base_delay.as_millis() as f64)
            * self.backoff_multiplier.powi(attempt as i32 - 1);
        let mut delay = Duration::from_millis(delay_ms as u64);

        if delay > self.max_delay {
            delay = self.max_delay;
        }

        if self.jitter {
            let jitter_factor = rand::thread_rng().gen_range(0.5..=1.5);
            delay = Duration::from_millis((delay.as_millis() as f64 * jitter_factor) as u64);
        }

        delay
    }
}

/// Parse a `Retry-After` header given in whole seconds (the form Airtable
/// uses). HTTP-date values are ignored.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
