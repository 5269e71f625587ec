//! Date and time resolution over stored schedule entries
//!
//! All computations take an explicit `now` in local naive time. Entries whose
//! day, time or date cannot be parsed are skipped rather than reported.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add RollingWeek policy and class occurrence windows for reminders
//! - 1.0.0: Same-day next class, today's classes, due-soon filter, countdown

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use std::str::FromStr;

use crate::core::error::{DATE_FORMAT_HINT, TIME_FORMAT_HINT, WEEKDAY_FORMAT_HINT};
use crate::core::{PlannerError, PlannerResult};
use crate::store::{ClassEntry, HomeworkEntry};

/// How far ahead `next_class` looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NextClassPolicy {
    /// Only classes on today's weekday that start later today
    #[default]
    SameDay,
    /// The next occurrence of any class within the coming week
    RollingWeek,
}

impl std::fmt::Display for NextClassPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NextClassPolicy::SameDay => write!(f, "today"),
            NextClassPolicy::RollingWeek => write!(f, "week"),
        }
    }
}

impl FromStr for NextClassPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "today" | "same_day" | "sameday" => Ok(NextClassPolicy::SameDay),
            "week" | "rolling_week" | "rollingweek" => Ok(NextClassPolicy::RollingWeek),
            _ => Err(anyhow::anyhow!("Invalid next class policy: {}", s)),
        }
    }
}

/// The class found by `next_class` and when it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextClass {
    pub entry: ClassEntry,
    pub starts_at: NaiveDateTime,
    pub starts_in: Duration,
}

pub fn parse_weekday(value: &str) -> PlannerResult<Weekday> {
    Weekday::from_str(value.trim()).map_err(|_| PlannerError::DateParse {
        value: value.to_string(),
        expected: WEEKDAY_FORMAT_HINT,
    })
}

/// Full English name of a weekday, e.g. "Monday"
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn parse_time(value: &str) -> PlannerResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| PlannerError::DateParse {
        value: value.to_string(),
        expected: TIME_FORMAT_HINT,
    })
}

pub fn parse_date(value: &str) -> PlannerResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| PlannerError::DateParse {
        value: value.to_string(),
        expected: DATE_FORMAT_HINT,
    })
}

/// Start of the class's next occurrence strictly after `now`, if the policy allows one
pub fn next_occurrence(
    entry: &ClassEntry,
    now: NaiveDateTime,
    policy: NextClassPolicy,
) -> Option<NaiveDateTime> {
    let weekday = parse_weekday(&entry.day).ok()?;
    let time = parse_time(&entry.time).ok()?;

    let days_ahead = (weekday.num_days_from_monday() as i64
        - now.weekday().num_days_from_monday() as i64)
        .rem_euclid(7);

    match policy {
        NextClassPolicy::SameDay => {
            if days_ahead != 0 {
                return None;
            }
            let start = now.date().and_time(time);
            (start > now).then_some(start)
        }
        NextClassPolicy::RollingWeek => {
            let mut start = (now.date() + Duration::days(days_ahead)).and_time(time);
            if start <= now {
                start += Duration::days(7);
            }
            Some(start)
        }
    }
}

/// The class with the smallest strictly positive offset from `now`
///
/// Ties keep the earlier entry.
pub fn next_class(
    classes: &[ClassEntry],
    now: NaiveDateTime,
    policy: NextClassPolicy,
) -> Option<NextClass> {
    let mut best: Option<NextClass> = None;

    for entry in classes {
        let Some(starts_at) = next_occurrence(entry, now, policy) else {
            continue;
        };
        let starts_in = starts_at - now;
        if best.as_ref().map_or(true, |b| starts_in < b.starts_in) {
            best = Some(NextClass {
                entry: entry.clone(),
                starts_at,
                starts_in,
            });
        }
    }

    best
}

/// Classes whose day names today's weekday, ignoring case
pub fn todays_classes(classes: &[ClassEntry], now: NaiveDateTime) -> Vec<&ClassEntry> {
    let today = now.format("%A").to_string().to_lowercase();
    classes
        .iter()
        .filter(|c| c.day.to_lowercase() == today)
        .collect()
}

/// Calendar days from today until `date`; negative when `date` is past
pub fn days_until(date: NaiveDate, now: NaiveDateTime) -> i64 {
    (date - now.date()).num_days()
}

/// Homework due between today and `days` days from now, inclusive
pub fn homework_due_within(
    homework: &[HomeworkEntry],
    now: NaiveDateTime,
    days: i64,
) -> Vec<&HomeworkEntry> {
    homework
        .iter()
        .filter(|hw| match parse_date(&hw.due) {
            Ok(due) => (0..=days).contains(&days_until(due, now)),
            Err(_) => false,
        })
        .collect()
}

/// Days left until an exam on `date` (YYYY-MM-DD)
pub fn exam_countdown(date: &str, now: NaiveDateTime) -> PlannerResult<i64> {
    Ok(days_until(parse_date(date)?, now))
}

/// Start of an occurrence of `entry` falling in `(after, until]`, if any
///
/// Windows are expected to be shorter than a week.
pub fn class_start_between(
    entry: &ClassEntry,
    after: NaiveDateTime,
    until: NaiveDateTime,
) -> Option<NaiveDateTime> {
    next_occurrence(entry, after, NextClassPolicy::RollingWeek).filter(|start| *start <= until)
}

/// Format an offset as `{hours}h {minutes}m`
pub fn format_offset(offset: Duration) -> String {
    let total = offset.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    format!("{hours}h {minutes}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        parse_date(date).unwrap().and_time(parse_time(time).unwrap())
    }

    // 2025-01-06 is a Monday
    const MONDAY: &str = "2025-01-06";

    #[test]
    fn test_next_class_same_day_upcoming() {
        let classes = vec![ClassEntry::new("Math", "Monday", "09:00")];
        let next = next_class(&classes, at(MONDAY, "08:00"), NextClassPolicy::SameDay).unwrap();
        assert_eq!(next.entry.name, "Math");
        assert_eq!(next.starts_in, Duration::minutes(60));
        assert_eq!(format_offset(next.starts_in), "1h 0m");
    }

    #[test]
    fn test_next_class_same_day_already_past() {
        let classes = vec![ClassEntry::new("Math", "Monday", "09:00")];
        assert!(next_class(&classes, at(MONDAY, "10:00"), NextClassPolicy::SameDay).is_none());
    }

    #[test]
    fn test_next_class_same_day_ignores_other_weekdays() {
        let classes = vec![ClassEntry::new("Physics", "Tuesday", "09:00")];
        assert!(next_class(&classes, at(MONDAY, "08:00"), NextClassPolicy::SameDay).is_none());
    }

    #[test]
    fn test_next_class_picks_smallest_offset() {
        let classes = vec![
            ClassEntry::new("Late", "Monday", "15:30"),
            ClassEntry::new("Soon", "monday", "09:15"),
            ClassEntry::new("Broken", "Monday", "9am"),
            ClassEntry::new("Nope", "Moonday", "09:00"),
        ];
        let next = next_class(&classes, at(MONDAY, "09:00"), NextClassPolicy::SameDay).unwrap();
        assert_eq!(next.entry.name, "Soon");
        assert_eq!(format_offset(next.starts_in), "0h 15m");
    }

    #[test]
    fn test_next_class_exact_start_is_not_upcoming() {
        let classes = vec![ClassEntry::new("Math", "Monday", "09:00")];
        assert!(next_class(&classes, at(MONDAY, "09:00"), NextClassPolicy::SameDay).is_none());
    }

    #[test]
    fn test_next_class_rolling_week_crosses_days() {
        let classes = vec![
            ClassEntry::new("Math", "Monday", "09:00"),
            ClassEntry::new("Physics", "Wednesday", "11:00"),
        ];
        let next =
            next_class(&classes, at(MONDAY, "10:00"), NextClassPolicy::RollingWeek).unwrap();
        assert_eq!(next.entry.name, "Physics");
        assert_eq!(next.starts_at, at("2025-01-08", "11:00"));
        assert_eq!(format_offset(next.starts_in), "49h 0m");
    }

    #[test]
    fn test_next_class_rolling_week_wraps_to_next_week() {
        let classes = vec![ClassEntry::new("Math", "Monday", "09:00")];
        let next =
            next_class(&classes, at(MONDAY, "10:00"), NextClassPolicy::RollingWeek).unwrap();
        assert_eq!(next.starts_at, at("2025-01-13", "09:00"));
    }

    #[test]
    fn test_todays_classes_case_insensitive() {
        let classes = vec![
            ClassEntry::new("Math", "MONDAY", "09:00"),
            ClassEntry::new("Art", "Tuesday", "10:00"),
            ClassEntry::new("Chem", "monday", "14:00"),
        ];
        let today = todays_classes(&classes, at(MONDAY, "07:00"));
        let names: Vec<&str> = today.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Math", "Chem"]);
    }

    #[test]
    fn test_homework_due_within_window() {
        let now = at("2025-01-01", "12:00");
        let homework = vec![
            HomeworkEntry::new("in_two", "2025-01-03"),
            HomeworkEntry::new("in_four", "2025-01-05"),
            HomeworkEntry::new("yesterday", "2024-12-31"),
            HomeworkEntry::new("today", "2025-01-01"),
            HomeworkEntry::new("malformed", "Jan 3"),
        ];
        let due = homework_due_within(&homework, now, 3);
        let names: Vec<&str> = due.iter().map(|hw| hw.name.as_str()).collect();
        assert_eq!(names, vec!["in_two", "today"]);
    }

    #[test]
    fn test_exam_countdown() {
        let now = at("2025-01-01", "18:45");
        assert_eq!(exam_countdown("2025-01-10", now).unwrap(), 9);
        assert!(exam_countdown("2024-12-31", now).unwrap() < 0);
        assert_eq!(exam_countdown("2025-01-01", now).unwrap(), 0);
    }

    #[test]
    fn test_exam_countdown_rejects_bad_format() {
        let err = exam_countdown("10/01/2025", at("2025-01-01", "00:00")).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::DateParse {
                expected: DATE_FORMAT_HINT,
                ..
            }
        ));
    }

    #[test]
    fn test_class_start_between_window() {
        let entry = ClassEntry::new("Math", "Monday", "09:00");
        let hit = class_start_between(&entry, at(MONDAY, "08:50"), at(MONDAY, "09:00"));
        assert_eq!(hit, Some(at(MONDAY, "09:00")));

        let miss = class_start_between(&entry, at(MONDAY, "09:00"), at(MONDAY, "09:10"));
        assert_eq!(miss, None);
    }

    #[test]
    fn test_weekday_names_round_trip() {
        assert_eq!(weekday_name(parse_weekday("thu").unwrap()), "Thursday");
        assert_eq!(weekday_name(parse_weekday(" SUNDAY ").unwrap()), "Sunday");
        assert!(parse_weekday("Someday").is_err());
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("today".parse::<NextClassPolicy>().unwrap(), NextClassPolicy::SameDay);
        assert_eq!("WEEK".parse::<NextClassPolicy>().unwrap(), NextClassPolicy::RollingWeek);
        assert!("month".parse::<NextClassPolicy>().is_err());
        assert_eq!(NextClassPolicy::RollingWeek.to_string(), "week");
    }
}
