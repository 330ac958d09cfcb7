//! Environment configuration for the analytics data source.

use std::{str::FromStr, time::Duration};

use common::analytics_const::{MAX_RANGE_DAYS, MOCK_DELAY_MS, TOP_QUERIES_LIMIT};

pub const ENV_MOCK_DELAY_MS: &str = "ANALYTICS_MOCK_DELAY_MS";
pub const ENV_TOP_QUERIES_LIMIT: &str = "ANALYTICS_TOP_QUERIES_LIMIT";
pub const ENV_MOCK_FAIL: &str = "ANALYTICS_MOCK_FAIL";
pub const ENV_MAX_RANGE_DAYS: &str = "ANALYTICS_MAX_RANGE_DAYS";

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    pub mock_delay: Duration,
    pub top_queries_limit: usize,
    /// Requests spanning more calendar days than this are rejected.
    pub max_range_days: i64,
    /// Forces every fetch to fail, for exercising the error screen.
    pub mock_fail: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            mock_delay: Duration::from_millis(MOCK_DELAY_MS),
            top_queries_limit: TOP_QUERIES_LIMIT,
            max_range_days: MAX_RANGE_DAYS,
            mock_fail: false,
        }
    }
}

impl AnalyticsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mock_delay = parse_or_default(&lookup, ENV_MOCK_DELAY_MS, MOCK_DELAY_MS);
        Self {
            mock_delay: Duration::from_millis(mock_delay),
            top_queries_limit: parse_or_default(&lookup, ENV_TOP_QUERIES_LIMIT, defaults.top_queries_limit),
            max_range_days: match parse_or_default(&lookup, ENV_MAX_RANGE_DAYS, defaults.max_range_days) {
                days if days >= 1 => days,
                days => {
                    tracing::warn!("{ENV_MAX_RANGE_DAYS}={days} must be at least 1, using {}", defaults.max_range_days);
                    defaults.max_range_days
                }
            },
            mock_fail: lookup(ENV_MOCK_FAIL).map(|v| is_truthy(&v)).unwrap_or(defaults.mock_fail),
        }
    }
}

fn parse_or_default<T: FromStr + Copy + std::fmt::Display>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    let Some(raw) = lookup(key) else { return default };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("{key}={raw:?} is not valid, using {default}");
            default
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(AnalyticsConfig::from_lookup(lookup(&[])), AnalyticsConfig::default());
        assert_eq!(AnalyticsConfig::default().mock_delay, Duration::from_millis(500));
        assert_eq!(AnalyticsConfig::default().top_queries_limit, 20);
        assert_eq!(AnalyticsConfig::default().max_range_days, 366);
    }

    #[test]
    fn reads_overrides() {
        let config = AnalyticsConfig::from_lookup(lookup(&[
            (ENV_MOCK_DELAY_MS, "0"),
            (ENV_TOP_QUERIES_LIMIT, " 5 "),
            (ENV_MOCK_FAIL, "TRUE"),
            (ENV_MAX_RANGE_DAYS, "31"),
        ]));
        assert_eq!(config.max_range_days, 31);
        assert_eq!(config.mock_delay, Duration::ZERO);
        assert_eq!(config.top_queries_limit, 5);
        assert!(config.mock_fail);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = AnalyticsConfig::from_lookup(lookup(&[(ENV_MOCK_DELAY_MS, "soon"), (ENV_TOP_QUERIES_LIMIT, "-3"), (ENV_MOCK_FAIL, "nope"), (ENV_MAX_RANGE_DAYS, "0")]));
        assert_eq!(config.max_range_days, 366);
        assert_eq!(config.mock_delay, Duration::from_millis(500));
        assert_eq!(config.top_queries_limit, 20);
        assert!(!config.mock_fail);
    }
}
