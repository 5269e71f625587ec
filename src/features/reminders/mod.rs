//! # Reminders Feature
//!
//! Direct-message reminders ahead of class start, driven by `!setreminder`.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0
//! - **Toggleable**: true

pub mod scheduler;

pub use scheduler::{collect_due, DueReminder, ReminderScheduler};
