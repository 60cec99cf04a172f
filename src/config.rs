//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is loaded first when present.

use crate::error::{ConfigError, ConfigResult};
use crate::models::{LeapDayPolicy, UpcomingOptions, YearWrap, DEFAULT_WINDOW_DAYS};
use std::env;

/// Longest accepted birthday window, in days.
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Configuration for the contact assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Length of the `birthdays` window in days (default: 7)
    pub birthday_window_days: u32,

    /// Whether birthdays already passed this year roll over to next year
    /// (default: next-year)
    pub year_wrap: YearWrap,

    /// Placement of February 29 birthdays in common years (default: clamp)
    pub leap_day_policy: LeapDayPolicy,

    /// Move weekend congratulations to Monday (default: false)
    pub shift_weekends: bool,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: window length, 0-365 (default: 7)
    /// - `BIRTHDAY_YEAR_WRAP`: `next-year` or `current-year-only` (default: `next-year`)
    /// - `LEAP_DAY_POLICY`: `clamp` or `skip` (default: `clamp`)
    /// - `BIRTHDAY_WEEKEND_SHIFT`: `true` or `false` (default: `false`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let year_wrap = match env::var("BIRTHDAY_YEAR_WRAP") {
            Ok(val) => Self::parse_year_wrap(&val)?,
            Err(_) => YearWrap::default(),
        };

        let leap_day_policy = match env::var("LEAP_DAY_POLICY") {
            Ok(val) => Self::parse_leap_day_policy(&val)?,
            Err(_) => LeapDayPolicy::default(),
        };

        let shift_weekends = Self::parse_env_bool("BIRTHDAY_WEEKEND_SHIFT", false)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            year_wrap,
            leap_day_policy,
            shift_weekends,
            log_level,
        })
    }

    /// Options for the upcoming-birthday query.
    pub fn upcoming_options(&self) -> UpcomingOptions {
        UpcomingOptions {
            window_days: self.birthday_window_days,
            year_wrap: self.year_wrap,
            leap_day: self.leap_day_policy,
            shift_weekends: self.shift_weekends,
        }
    }

    fn parse_year_wrap(val: &str) -> ConfigResult<YearWrap> {
        match val.trim().to_ascii_lowercase().as_str() {
            "next-year" => Ok(YearWrap::NextOccurrence),
            "current-year-only" => Ok(YearWrap::CurrentYearOnly),
            _ => Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_YEAR_WRAP".to_string(),
                reason: format!("Must be next-year or current-year-only, got: {}", val),
            }),
        }
    }

    fn parse_leap_day_policy(val: &str) -> ConfigResult<LeapDayPolicy> {
        match val.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(LeapDayPolicy::ClampToFeb28),
            "skip" => Ok(LeapDayPolicy::Skip),
            _ => Err(ConfigError::InvalidValue {
                var: "LEAP_DAY_POLICY".to_string(),
                reason: format!("Must be clamp or skip, got: {}", val),
            }),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            year_wrap: YearWrap::default(),
            leap_day_policy: LeapDayPolicy::default(),
            shift_weekends: false,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 5] = [
        "BIRTHDAY_WINDOW_DAYS",
        "BIRTHDAY_YEAR_WRAP",
        "LEAP_DAY_POLICY",
        "BIRTHDAY_WEEKEND_SHIFT",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.year_wrap, YearWrap::NextOccurrence);
        assert_eq!(config.leap_day_policy, LeapDayPolicy::ClampToFeb28);
        assert!(!config.shift_weekends);
        assert_eq!(config.upcoming_options(), UpcomingOptions::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();
        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.year_wrap, YearWrap::NextOccurrence);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("BIRTHDAY_YEAR_WRAP", "current-year-only");
        guard.set("LEAP_DAY_POLICY", "skip");
        guard.set("BIRTHDAY_WEEKEND_SHIFT", "true");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.upcoming_options(),
            UpcomingOptions {
                window_days: 14,
                year_wrap: YearWrap::CurrentYearOnly,
                leap_day: LeapDayPolicy::Skip,
                shift_weekends: true,
            }
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_window_too_large() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "400");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_WINDOW_DAYS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_window_not_a_number() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "a week");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, reason }) => {
                assert_eq!(var, "BIRTHDAY_WINDOW_DAYS");
                assert_eq!(reason, "Must be a non-negative number, got: a week");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_zero_window_accepted() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "0");
        assert_eq!(Config::from_env().unwrap().birthday_window_days, 0);
    }

    #[test]
    #[serial]
    fn test_config_invalid_year_wrap() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_YEAR_WRAP", "sometimes");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_YEAR_WRAP");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_leap_day_policy() {
        let mut guard = EnvGuard::new();
        guard.set("LEAP_DAY_POLICY", "march-first");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_ON", "Yes");
        guard.set("TEST_BOOL_BAD", "maybe");

        assert!(Config::parse_env_bool("TEST_BOOL_ON", false).unwrap());
        assert!(!Config::parse_env_bool("NONEXISTENT_BOOL", false).unwrap());
        assert!(Config::parse_env_bool("TEST_BOOL_BAD", false).is_err());
    }
}
