//! Text command parsing
//!
//! Splits a message body into a verb and positional arguments. Double quotes
//! group words into one argument, so `!addclass "Linear Algebra" Monday 09:00`
//! has three arguments.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use regex::Regex;
use std::sync::OnceLock;

use crate::core::{PlannerError, PlannerResult};

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""([^"]*)"|(\S+)"#).expect("token pattern is valid"))
}

/// Split `input` into arguments, honouring double quotes
pub fn tokenize(input: &str) -> Vec<String> {
    token_pattern()
        .captures_iter(input)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Strip `prefix` and split the rest into a lowercase verb and its arguments
///
/// Returns `None` when the message is not a command.
pub fn parse_command(content: &str, prefix: &str) -> Option<(String, Vec<String>)> {
    let body = content.trim().strip_prefix(prefix)?;
    if body.is_empty() || body.starts_with(char::is_whitespace) {
        return None;
    }

    let mut tokens = tokenize(body);
    if tokens.is_empty() {
        return None;
    }
    let verb = tokens.remove(0).to_lowercase();
    Some((verb, tokens))
}

/// Positional arguments of one invocation, checked against a usage line
#[derive(Debug, Clone)]
pub struct Args<'a> {
    values: &'a [String],
    usage: &'a str,
}

impl<'a> Args<'a> {
    pub fn new(values: &'a [String], usage: &'a str) -> Self {
        Self { values, usage }
    }

    /// Fail unless exactly `count` arguments were given
    pub fn expect(&self, count: usize) -> PlannerResult<()> {
        if self.values.len() == count {
            Ok(())
        } else {
            Err(PlannerError::argument(self.usage))
        }
    }

    pub fn string(&self, index: usize) -> PlannerResult<&'a str> {
        self.values
            .get(index)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| PlannerError::argument(self.usage))
    }

    pub fn integer(&self, index: usize) -> PlannerResult<i64> {
        self.string(index)?
            .parse::<i64>()
            .map_err(|_| PlannerError::argument(self.usage))
    }

    /// Integer argument that must lie in `min..=max`
    pub fn integer_in(&self, index: usize, min: i64, max: i64) -> PlannerResult<i64> {
        let value = self.integer(index)?;
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(PlannerError::argument(self.usage))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_plain_words() {
        assert_eq!(tokenize("Math  Monday 09:00"), vec!["Math", "Monday", "09:00"]);
    }

    #[test]
    fn test_tokenize_quoted_groups() {
        assert_eq!(
            tokenize(r#""Linear Algebra" Monday 09:00"#),
            vec!["Linear Algebra", "Monday", "09:00"]
        );
        assert_eq!(tokenize(r#""" x"#), vec!["", "x"]);
    }

    #[test]
    fn test_parse_command() {
        let (verb, args) = parse_command("!AddClass Math Monday 09:00", "!").unwrap();
        assert_eq!(verb, "addclass");
        assert_eq!(args, vec!["Math", "Monday", "09:00"]);

        let (verb, args) = parse_command("  !viewhw  ", "!").unwrap();
        assert_eq!(verb, "viewhw");
        assert!(args.is_empty());
    }

    #[test]
    fn test_parse_command_ignores_non_commands() {
        assert!(parse_command("hello there", "!").is_none());
        assert!(parse_command("!", "!").is_none());
        assert!(parse_command("! help", "!").is_none());
        assert!(parse_command("?help", "!").is_none());
    }

    #[test]
    fn test_args_arity_and_types() {
        let values = vec!["Math".to_string(), "15".to_string()];
        let args = Args::new(&values, "!setreminder name minutes_before");

        assert!(args.expect(2).is_ok());
        assert!(args.expect(3).is_err());
        assert_eq!(args.string(0).unwrap(), "Math");
        assert_eq!(args.integer(1).unwrap(), 15);
        assert!(matches!(args.integer(0), Err(PlannerError::Argument { .. })));
        assert!(args.string(5).is_err());
        assert!(args.integer_in(1, 20, 30).is_err());
        assert_eq!(args.integer_in(1, 0, 30).unwrap(), 15);
    }
}
