//! # Feature: Rate Limiting
//!
//! Per-user sliding window over recent commands, backed by DashMap for
//! concurrent access from every message task.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Report how long a limited user has to wait
//! - 1.0.0: Initial per-user sliding window

use dashmap::DashMap;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct RateLimiter {
    requests: DashMap<String, Vec<Instant>>,
    max_requests: usize,
    time_window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, time_window: Duration) -> Self {
        RateLimiter {
            requests: DashMap::new(),
            max_requests,
            time_window,
        }
    }

    /// Record a request for `user_id`; false when the window is already full
    pub fn check_rate_limit(&self, user_id: &str) -> bool {
        let now = Instant::now();
        let mut entry = self.requests.entry(user_id.to_string()).or_default();

        entry.retain(|&time| now.duration_since(time) < self.time_window);

        if entry.len() >= self.max_requests {
            false
        } else {
            entry.push(now);
            true
        }
    }

    /// Time until the oldest request in the user's window expires
    pub fn retry_after(&self, user_id: &str) -> Option<Duration> {
        let entry = self.requests.get(user_id)?;
        let oldest = entry.first()?;
        self.time_window.checked_sub(oldest.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_rate_limiter_allows_under_limit() {
        let limiter = RateLimiter::new(3, Duration::from_secs(1));

        assert!(limiter.check_rate_limit("user1"));
        assert!(limiter.check_rate_limit("user1"));
        assert!(limiter.check_rate_limit("user1"));
    }

    #[test]
    fn test_rate_limiter_blocks_over_limit() {
        let limiter = RateLimiter::new(2, Duration::from_secs(60));

        assert!(limiter.check_rate_limit("user1"));
        assert!(limiter.check_rate_limit("user1"));
        assert!(!limiter.check_rate_limit("user1"));

        let wait = limiter.retry_after("user1").unwrap();
        assert!(wait <= Duration::from_secs(60));
        assert!(wait > Duration::from_secs(50));
    }

    #[test]
    fn test_rate_limiter_resets_after_window() {
        let limiter = RateLimiter::new(1, Duration::from_millis(100));

        assert!(limiter.check_rate_limit("user1"));
        assert!(!limiter.check_rate_limit("user1"));

        sleep(Duration::from_millis(150));
        assert!(limiter.check_rate_limit("user1"));
    }

    #[test]
    fn test_rate_limiter_per_user() {
        let limiter = RateLimiter::new(1, Duration::from_secs(1));

        assert!(limiter.check_rate_limit("user1"));
        assert!(limiter.check_rate_limit("user2"));
        assert!(!limiter.check_rate_limit("user1"));
        assert!(!limiter.check_rate_limit("user2"));
    }

    #[test]
    fn test_retry_after_unknown_user() {
        let limiter = RateLimiter::new(1, Duration::from_secs(1));
        assert!(limiter.retry_after("nobody").is_none());
    }
}
