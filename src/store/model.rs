//! Per-user record types as persisted in the data file

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whole-file mapping: stringified user id to that user's record
pub type UserMap = BTreeMap<String, UserRecord>;

/// Everything the bot stores for one user
///
/// All four sequences are always present once a record exists. A hand-edited
/// file missing one of them still loads, with that sequence empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
    #[serde(default)]
    pub homework: Vec<HomeworkEntry>,
    #[serde(default)]
    pub reminders: Vec<ReminderEntry>,
    #[serde(default)]
    pub exams: Vec<ExamEntry>,
}

impl UserRecord {
    /// Drop every entry while keeping the record itself
    pub fn clear(&mut self) {
        self.classes.clear();
        self.homework.clear();
        self.reminders.clear();
        self.exams.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
            && self.homework.is_empty()
            && self.reminders.is_empty()
            && self.exams.is_empty()
    }

    /// Remove all classes named exactly `name`, returning how many were removed
    pub fn remove_classes(&mut self, name: &str) -> usize {
        let before = self.classes.len();
        self.classes.retain(|c| c.name != name);
        before - self.classes.len()
    }

    /// Remove all homework named exactly `name`, returning how many were removed
    pub fn remove_homework(&mut self, name: &str) -> usize {
        let before = self.homework.len();
        self.homework.retain(|hw| hw.name != name);
        before - self.homework.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub name: String,
    /// Weekday name, e.g. "Monday"
    pub day: String,
    /// Start time as HH:MM
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeworkEntry {
    pub name: String,
    /// Due date as YYYY-MM-DD
    pub due: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderEntry {
    /// Class name this reminder applies to
    pub name: String,
    pub minutes_before: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamEntry {
    pub name: String,
    /// Exam date as YYYY-MM-DD
    pub date: String,
}

impl ClassEntry {
    pub fn new(name: impl Into<String>, day: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            day: day.into(),
            time: time.into(),
        }
    }
}

impl HomeworkEntry {
    pub fn new(name: impl Into<String>, due: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due: due.into(),
        }
    }
}
