use std::env;
use std::time::Duration;

use crate::core::retry::RetryPolicy;

pub const DEFAULT_API_URL: &str = "http://localhost:8787";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub max_attempts: u32,
    pub retry_delay: Duration,
    pub retry_server_errors: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            retry_server_errors: false,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing keys fall back
    /// to defaults; malformed values are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let retry_delay = match lookup("SUMMARY_RETRY_DELAY_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| format!("SUMMARY_RETRY_DELAY_MS: {}", e))?,
            ),
            None => defaults.retry_delay,
        };

        Ok(Self {
            api_url: lookup("SUMMARY_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_url),
            api_key: lookup("SUMMARY_API_KEY").filter(|v| !v.trim().is_empty()),
            max_attempts: match lookup("SUMMARY_MAX_ATTEMPTS") {
                Some(raw) => raw
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| format!("SUMMARY_MAX_ATTEMPTS: {}", e))?,
                None => defaults.max_attempts,
            },
            retry_delay,
            retry_server_errors: match lookup("SUMMARY_RETRY_SERVER_ERRORS") {
                Some(raw) => parse_bool(&raw)
                    .ok_or_else(|| format!("SUMMARY_RETRY_SERVER_ERRORS: invalid boolean {raw:?}"))?,
                None => defaults.retry_server_errors,
            },
        })
    }

    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, self.retry_delay)
            .retry_server_errors(self.retry_server_errors)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
