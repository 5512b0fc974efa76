//! Retry policy and exponential backoff for client calls

use rand::{thread_rng, Rng};
use reqwest::StatusCode;
use std::time::{Duration, Instant};

/// Which failed calls are retried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryOn {
    /// Every HTTP error status and every transport failure
    #[default]
    AnyError,
    /// Transport failures, 408, 429 and 5xx only; other 4xx fail immediately
    TransientOnly,
}

impl RetryOn {
    pub fn should_retry(&self, err: &reqwest::Error) -> bool {
        match self {
            RetryOn::AnyError => true,
            RetryOn::TransientOnly => match err.status() {
                Some(status) => is_transient_status(status),
                // Builder errors mean the request itself is malformed
                None => !err.is_builder(),
            },
        }
    }
}

fn is_transient_status(status: StatusCode) -> bool {
    status.is_server_error()
        || status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS
}

/// Exponential backoff schedule bounded by a total time budget.
///
/// The n-th delay is `base * 2^n` plus a random jitter in `[0, base)`, capped
/// to whatever remains of the budget. The budget is only checked between
/// attempts, so a call in flight is never interrupted.
#[derive(Debug, Clone)]
pub struct Backoff {
    base: Duration,
    max_elapsed: Duration,
    attempt: u32,
    started: Instant,
}

impl Backoff {
    pub fn new(base: Duration, max_elapsed: Duration) -> Self {
        Self {
            base,
            max_elapsed,
            attempt: 0,
            started: Instant::now(),
        }
    }

    /// Delay before the next attempt, or `None` once the budget is spent
    pub fn next_delay(&mut self) -> Option<Duration> {
        let elapsed = self.started.elapsed();
        if elapsed >= self.max_elapsed {
            return None;
        }

        let exponential = self
            .base
            .saturating_mul(2u32.saturating_pow(self.attempt));
        self.attempt = self.attempt.saturating_add(1);

        let delay = exponential.saturating_add(jitter(self.base));
        Some(delay.min(self.max_elapsed - elapsed))
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Random jitter in `[0, max)`
fn jitter(max: Duration) -> Duration {
    if max.is_zero() {
        return Duration::ZERO;
    }
    thread_rng().gen_range(Duration::ZERO..max)
}
