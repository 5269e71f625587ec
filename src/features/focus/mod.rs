//! # Focus Mode Feature
//!
//! Cancellable study timers that ping the user when time is up.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod timer;

pub use timer::{FocusStart, FocusTimers, MAX_FOCUS_MINUTES};
