//! Core rate limiter implementation

use super::types::RateLimitDecision;
use crate::config::models::rate_limit::RateLimitConfig;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

/// Sliding window rate limiter
///
/// Keeps the admission times of the trailing window and admits a request only while
/// fewer than `limit` of them remain. Expired timestamps are pruned lazily on every check.
#[derive(Debug)]
pub struct RateLimiter {
    enabled: bool,
    limit: u32,
    window: Duration,
    timestamps: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter from configuration
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            enabled: config.enabled,
            limit: config.requests_per_minute,
            window: Duration::from_secs(config.window_secs),
            timestamps: Mutex::new(VecDeque::new()),
        }
    }

    /// Create an enabled rate limiter with an explicit quota and window
    pub fn with_window(limit: u32, window: Duration) -> Self {
        Self {
            enabled: true,
            limit,
            window,
            timestamps: Mutex::new(VecDeque::new()),
        }
    }

    /// Admit or reject a request arriving now
    pub fn admit(&self) -> RateLimitDecision {
        self.admit_at(Instant::now())
    }

    /// Admit or reject a request arriving at `now`
    ///
    /// Prune, check and append happen under a single lock acquisition so two concurrent
    /// callers can never both take the last slot.
    pub fn admit_at(&self, now: Instant) -> RateLimitDecision {
        self.evaluate(now, true)
    }

    /// Current window state without recording a request
    pub fn status(&self) -> RateLimitDecision {
        self.status_at(Instant::now())
    }

    /// Window state at `now` without recording a request
    pub fn status_at(&self, now: Instant) -> RateLimitDecision {
        self.evaluate(now, false)
    }

    /// Whether rate limiting is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Configured quota per window
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Configured window length
    pub fn window(&self) -> Duration {
        self.window
    }

    fn evaluate(&self, now: Instant, record: bool) -> RateLimitDecision {
        if !self.enabled {
            return RateLimitDecision::unlimited(self.limit);
        }

        let mut timestamps = self.timestamps.lock();

        while let Some(&oldest) = timestamps.front() {
            if now.saturating_duration_since(oldest) >= self.window {
                timestamps.pop_front();
            } else {
                break;
            }
        }

        let current_count = timestamps.len() as u32;
        let allowed = current_count < self.limit;

        if !allowed {
            let retry_after_secs = self.retry_after(timestamps.front().copied(), now);
            debug!(
                current_count,
                limit = self.limit,
                retry_after_secs,
                "Rate limit exceeded"
            );
            return RateLimitDecision {
                allowed,
                current_count,
                limit: self.limit,
                remaining: 0,
                retry_after_secs: Some(retry_after_secs),
            };
        }

        let mut remaining = self.limit - current_count;
        if record {
            timestamps.push_back(now);
            remaining -= 1;
        }

        RateLimitDecision {
            allowed,
            current_count,
            limit: self.limit,
            remaining,
            retry_after_secs: None,
        }
    }

    /// Whole seconds until the oldest retained timestamp leaves the window (at least 1)
    fn retry_after(&self, oldest: Option<Instant>, now: Instant) -> u64 {
        let wait = match oldest {
            Some(oldest) => self
                .window
                .saturating_sub(now.saturating_duration_since(oldest)),
            None => self.window,
        };

        (wait.as_millis() as u64).div_ceil(1000).max(1)
    }
}
