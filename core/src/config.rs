//! Client configuration.
//!
//! Only the connect timeout is configurable. It is read once when the client
//! is built and never changes afterwards.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{HttpError, Result};

/// Connect timeout used when nothing overrides it.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Environment variable consulted by [`Config::from_env`], in whole seconds.
pub const TIMEOUT_ENV_VAR: &str = "TEXTHTTP_TIMEOUT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Applied to connection establishment of POST requests only.
    #[serde(rename = "connect_timeout_secs", deserialize_with = "secs")]
    pub connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Load from `TEXTHTTP_TIMEOUT`, falling back to the default when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_timeout_var(std::env::var(TIMEOUT_ENV_VAR).ok().as_deref())
    }

    fn from_timeout_var(value: Option<&str>) -> Result<Self> {
        let Some(raw) = value else {
            return Ok(Self::default());
        };
        let secs: u64 = raw.trim().parse().map_err(|_| {
            HttpError::InvalidConfig(format!("{TIMEOUT_ENV_VAR} must be whole seconds, got {raw:?}"))
        })?;
        Ok(Self::default().with_connect_timeout(Duration::from_secs(secs)))
    }
}

fn secs<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}
