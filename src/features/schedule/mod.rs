//! # Schedule Resolver
//!
//! Answers "what's next", "what's due" and "how many days left" from a user's
//! stored classes, homework and exams.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod resolver;

pub use resolver::{
    class_start_between, days_until, exam_countdown, format_offset, homework_due_within,
    next_class, next_occurrence, parse_date, parse_time, parse_weekday, todays_classes,
    weekday_name, NextClass, NextClassPolicy,
};
