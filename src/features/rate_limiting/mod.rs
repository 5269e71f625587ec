//! # Rate Limiting Feature
//!
//! Prevents command spam with a per-user request limit.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod limiter;

pub use limiter::RateLimiter;
