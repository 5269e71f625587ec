//! Environment-driven bot configuration
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add NEXT_CLASS_POLICY and REMINDERS_ENABLED
//! - 1.0.0: Initial config with token, data file, prefix and log level

use anyhow::Result;
use std::env;
use std::num::NonZeroUsize;

use crate::features::schedule::NextClassPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub data_file: String,
    pub command_prefix: String,
    pub log_level: String,
    pub next_class_policy: NextClassPolicy,
    pub reminders_enabled: bool,
    pub rate_limit_per_minute: usize,
}

impl Config {
    /// Build the config from process environment (call `dotenvy::dotenv()` first)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("DISCORD_TOKEN environment variable not set"))?;

        let next_class_policy = match lookup("NEXT_CLASS_POLICY") {
            Some(value) => value.parse()?,
            None => NextClassPolicy::default(),
        };

        let reminders_enabled = lookup("REMINDERS_ENABLED")
            .map(|v| parse_bool(&v))
            .unwrap_or(true);

        let rate_limit_per_minute = match lookup("RATE_LIMIT_PER_MINUTE") {
            Some(v) => v
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| {
                    anyhow::anyhow!("RATE_LIMIT_PER_MINUTE must be a positive integer, got '{v}'")
                })?
                .get(),
            None => 10,
        };

        Ok(Config {
            discord_token,
            data_file: lookup("DATA_FILE").unwrap_or_else(|| "user_data.json".to_string()),
            command_prefix: lookup("COMMAND_PREFIX").unwrap_or_else(|| "!".to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            next_class_policy,
            reminders_enabled,
            rate_limit_per_minute,
        })
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enabled"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc")])).unwrap();
        assert_eq!(config.data_file, "user_data.json");
        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.next_class_policy, NextClassPolicy::SameDay);
        assert!(config.reminders_enabled);
        assert_eq!(config.rate_limit_per_minute, 10);
    }

    #[test]
    fn test_missing_token_fails() {
        assert!(Config::from_lookup(lookup_from(&[])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "  ")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("DATA_FILE", "/tmp/planner.json"),
            ("COMMAND_PREFIX", "?"),
            ("NEXT_CLASS_POLICY", "week"),
            ("REMINDERS_ENABLED", "false"),
            ("RATE_LIMIT_PER_MINUTE", "3"),
        ]))
        .unwrap();
        assert_eq!(config.data_file, "/tmp/planner.json");
        assert_eq!(config.command_prefix, "?");
        assert_eq!(config.next_class_policy, NextClassPolicy::RollingWeek);
        assert!(!config.reminders_enabled);
        assert_eq!(config.rate_limit_per_minute, 3);
    }

    #[test]
    fn test_bad_policy_fails() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("NEXT_CLASS_POLICY", "someday"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_rate_limit_fails() {
        for bad in ["0", "-1", "ten"] {
            let result = Config::from_lookup(lookup_from(&[
                ("DISCORD_TOKEN", "abc"),
                ("RATE_LIMIT_PER_MINUTE", bad),
            ]));
            assert!(result.is_err(), "accepted {bad}");
        }
    }
}
