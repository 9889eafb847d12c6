//! Sliding-window rate limiter
//!
//! One bucket of request timestamps is kept per client key. On every check
//! the bucket is pruned to the trailing window, the current instant is
//! recorded (also for rejected requests, which therefore keep consuming
//! window slots), and the request is rejected when the in-window count
//! exceeds the limit: exactly `max_requests` calls are admitted per window,
//! the next one fails.
//!
//! The limiter performs no I/O and never suspends. State is process-local
//! and mutex-guarded; the bucket map is bounded by sweeping buckets whose
//! entries have all aged out of the window.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use lex_shared::config::RateLimitConfig;

/// Outcome of a rate-limit check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Request admitted; `remaining` counts the admissions left this window
    Admitted { remaining: u32 },
    /// Request rejected; retry once the oldest in-window entry ages out
    Rejected { retry_after_ms: i64 },
}

impl Decision {
    /// Helper to check for admission
    pub fn is_admitted(&self) -> bool {
        matches!(self, Decision::Admitted { .. })
    }
}

/// Per-process sliding-window rate limiter keyed by client identifier
pub struct SlidingWindowLimiter {
    config: RateLimitConfig,
    buckets: Mutex<HashMap<String, VecDeque<i64>>>,
}

impl SlidingWindowLimiter {
    /// Creates a limiter with the given window policy
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    /// Checks (and records) a request for `client_key` at `now_ms`
    ///
    /// `now_ms` is epoch milliseconds, injected so callers and tests control
    /// the clock.
    pub fn check(&self, client_key: &str, now_ms: i64) -> Decision {
        let cutoff = now_ms - self.config.window_ms;

        let mut buckets = self
            .buckets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Bound memory: sweep fully-stale buckets before tracking a new key
        if buckets.len() >= self.config.max_buckets && !buckets.contains_key(client_key) {
            buckets.retain(|_, bucket| bucket.back().is_some_and(|&newest| newest > cutoff));
        }

        let bucket = buckets.entry(client_key.to_string()).or_default();

        while bucket.front().is_some_and(|&oldest| oldest <= cutoff) {
            bucket.pop_front();
        }
        bucket.push_back(now_ms);

        let count = bucket.len() as u32;
        if count > self.config.max_requests {
            let oldest = bucket.front().copied().unwrap_or(now_ms);
            Decision::Rejected {
                retry_after_ms: (oldest + self.config.window_ms - now_ms).max(0),
            }
        } else {
            Decision::Admitted {
                remaining: self.config.max_requests - count,
            }
        }
    }

    /// Number of client buckets currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.buckets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}
