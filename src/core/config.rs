use std::env;
use std::time::Duration;

use url::Url;

use crate::errors::RelayError;

pub const SLACK_URL_VAR: &str = "SLACK_URL";
pub const SLACK_TIMEOUT_VAR: &str = "SLACK_TIMEOUT_SECS";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Raw relay settings.
///
/// Nothing is validated on load: both values are only checked once the relay
/// has an issue URL and is about to send, see [`AppConfig::destination`] and
/// [`AppConfig::request_timeout`].
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub slack_url: Option<String>,
    pub slack_timeout_secs: Option<String>,
}

impl AppConfig {
    /// Reads the process environment. Called once per invocation; the result
    /// is never cached.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            slack_url: lookup(SLACK_URL_VAR),
            slack_timeout_secs: lookup(SLACK_TIMEOUT_VAR),
        }
    }

    /// Config pointing at a fixed destination with the default timeout.
    #[must_use]
    pub fn with_slack_url(slack_url: impl Into<String>) -> Self {
        Self {
            slack_url: Some(slack_url.into()),
            slack_timeout_secs: None,
        }
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.slack_timeout_secs = Some(secs.to_string());
        self
    }

    pub fn destination(&self) -> Result<Url, RelayError> {
        let raw = self
            .slack_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| RelayError::Config(format!("{} is not set", SLACK_URL_VAR)))?;

        Url::parse(raw)
            .map_err(|e| RelayError::Config(format!("{} is not a valid URL: {}", SLACK_URL_VAR, e)))
    }

    /// Outbound request timeout, [`DEFAULT_TIMEOUT_SECS`] when unset.
    pub fn request_timeout(&self) -> Result<Duration, RelayError> {
        let Some(raw) = self.slack_timeout_secs.as_deref() else {
            return Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        };

        let secs = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| RelayError::Config(format!("{}: {}", SLACK_TIMEOUT_VAR, e)))?;
        if secs == 0 {
            return Err(RelayError::Config(format!(
                "{}: must be greater than zero",
                SLACK_TIMEOUT_VAR
            )));
        }
        Ok(Duration::from_secs(secs))
    }
}
