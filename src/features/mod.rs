//! # Features
//!
//! Schedule arithmetic, focus timers, class reminders, study tips and
//! per-user rate limiting.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add reminders and cancellable focus timers
//! - 1.0.0: Schedule, tips and rate limiting

pub mod focus;
pub mod rate_limiting;
pub mod reminders;
pub mod schedule;
pub mod tips;

pub use focus::{FocusStart, FocusTimers};
pub use rate_limiting::RateLimiter;
pub use reminders::ReminderScheduler;
pub use schedule::NextClassPolicy;
