//! Per-command handler implementations
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add focusstop to ProductivityHandler
//! - 1.0.0: Schedule, homework, productivity, exam and utility handlers

pub mod exams;
pub mod homework;
pub mod productivity;
pub mod schedule;
pub mod utility;

use std::sync::Arc;

use super::handler::TextCommandHandler;

/// Create all registered command handlers
pub fn create_all_handlers() -> Vec<Arc<dyn TextCommandHandler>> {
    vec![
        Arc::new(schedule::ScheduleHandler),
        Arc::new(homework::HomeworkHandler),
        Arc::new(productivity::ProductivityHandler),
        Arc::new(exams::ExamHandler),
        Arc::new(utility::UtilityHandler),
    ]
}
