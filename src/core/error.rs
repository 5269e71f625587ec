//! Error types for planner commands
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial error kinds for argument, lookup, date and store failures

use thiserror::Error;

/// Errors a single command invocation can produce
///
/// Every variant is local to one invocation. The router turns each kind into a
/// user-facing reply; nothing here is fatal to the process.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Wrong arguments. Usage: {usage}")]
    Argument { usage: String },

    #[error("No {kind} named '{name}' found.")]
    NotFound { kind: &'static str, name: String },

    #[error("Could not parse '{value}' (expected {expected})")]
    DateParse {
        value: String,
        expected: &'static str,
    },

    #[error("User data file is corrupt: {0}")]
    StoreCorrupt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlannerError {
    pub fn argument(usage: impl Into<String>) -> Self {
        PlannerError::Argument {
            usage: usage.into(),
        }
    }

    /// Reply text shown to the user for this error
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::Argument { usage } => format!("❌ Usage: `{usage}`"),
            PlannerError::NotFound { .. } => self.to_string(),
            PlannerError::DateParse { expected, .. } => match *expected {
                DATE_FORMAT_HINT => "Invalid date format. Use YYYY-MM-DD.".to_string(),
                TIME_FORMAT_HINT => "Invalid time format. Use HH:MM (24-hour).".to_string(),
                _ => "Invalid day. Use a weekday name like Monday.".to_string(),
            },
            PlannerError::StoreCorrupt(_) | PlannerError::Io(_) => {
                "Sorry, I couldn't read your saved data. Please tell the bot operator.".to_string()
            }
        }
    }

    /// Whether the failure comes from persistence rather than user input
    pub fn is_store_failure(&self) -> bool {
        matches!(self, PlannerError::StoreCorrupt(_) | PlannerError::Io(_))
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(e: serde_json::Error) -> Self {
        PlannerError::StoreCorrupt(e.to_string())
    }
}

pub const DATE_FORMAT_HINT: &str = "YYYY-MM-DD";
pub const TIME_FORMAT_HINT: &str = "HH:MM";
pub const WEEKDAY_FORMAT_HINT: &str = "a weekday name";

pub type PlannerResult<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_kind() {
        let err = PlannerError::NotFound {
            kind: "class",
            name: "Math".to_string(),
        };
        assert_eq!(err.user_message(), "No class named 'Math' found.");
    }

    #[test]
    fn test_date_parse_message_by_format() {
        let date = PlannerError::DateParse {
            value: "tomorrow".to_string(),
            expected: DATE_FORMAT_HINT,
        };
        assert_eq!(date.user_message(), "Invalid date format. Use YYYY-MM-DD.");

        let time = PlannerError::DateParse {
            value: "9am".to_string(),
            expected: TIME_FORMAT_HINT,
        };
        assert!(time.user_message().contains("HH:MM"));

        let day = PlannerError::DateParse {
            value: "Funday".to_string(),
            expected: WEEKDAY_FORMAT_HINT,
        };
        assert!(day.user_message().contains("weekday"));
    }

    #[test]
    fn test_json_error_is_store_corrupt() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: PlannerError = parse_err.into();
        assert!(matches!(err, PlannerError::StoreCorrupt(_)));
        assert!(err.is_store_failure());
    }

    #[test]
    fn test_argument_is_not_store_failure() {
        assert!(!PlannerError::argument("!due days").is_store_failure());
    }
}
