//! Client configuration loaded from environment variables.
//!
//! The client needs to know where the habit API lives and how long a
//! notification banner stays visible before it is dismissed.

use crate::errors::{Error, Result};
use std::time::Duration;

/// API base URL used when `HABIT_API_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Notification lifetime used when `HABIT_NOTIFICATION_SECS` is not set.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Settings for the habit API client and board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash (e.g. `http://localhost:5000/api`)
    pub api_base_url: String,
    /// How long a notification stays visible
    pub notification_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }
}

impl ClientConfig {
    /// Reads `HABIT_API_URL` and `HABIT_NOTIFICATION_SECS` from the environment.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the notification delay is not a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var("HABIT_API_URL").ok().as_deref(),
            std::env::var("HABIT_NOTIFICATION_SECS").ok().as_deref(),
        )
    }

    fn from_values(api_base_url: Option<&str>, notification_secs: Option<&str>) -> Result<Self> {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let notification_ttl = match notification_secs {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| Error::Config {
                    message: format!("Invalid HABIT_NOTIFICATION_SECS `{raw}`: {e}"),
                })?,
            None => DEFAULT_NOTIFICATION_TTL,
        };

        Ok(Self {
            api_base_url,
            notification_ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_values(None, None).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config =
            ClientConfig::from_values(Some("http://habits.local/api/"), Some("5")).unwrap();
        assert_eq!(config.api_base_url, "http://habits.local/api");
        assert_eq!(config.notification_ttl, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_delay() {
        let result = ClientConfig::from_values(None, Some("three"));
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
