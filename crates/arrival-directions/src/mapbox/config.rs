//! Directions client configuration.

use std::fmt;
use std::time::Duration;

use arrival_config::schema::DirectionsSchemaConfig;

use crate::DirectionsError;

pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/directions/v5/mapbox";

/// Environment variable consulted when the config carries no token.
const TOKEN_ENV: &str = "MAPBOX_ACCESS_TOKEN";

/// Directions client configuration.
#[derive(Clone)]
pub struct DirectionsConfig {
    pub access_token: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field("access_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl DirectionsConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Create config from the `MAPBOX_ACCESS_TOKEN` environment variable.
    pub fn from_env() -> Result<Self, DirectionsError> {
        match std::env::var(TOKEN_ENV) {
            Ok(token) if !token.trim().is_empty() => Ok(Self::new(token.trim())),
            _ => Err(DirectionsError::NotConfigured(format!(
                "set directions.access_token in config.toml or {TOKEN_ENV}"
            ))),
        }
    }

    /// Create config from the `[directions]` section.
    ///
    /// Resolution order for the token:
    /// 1. `directions.access_token`
    /// 2. `MAPBOX_ACCESS_TOKEN` env var
    pub fn from_schema(schema: &DirectionsSchemaConfig) -> Result<Self, DirectionsError> {
        let base = match schema.access_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Self::new(token),
            _ => Self::from_env()?,
        };
        Ok(base
            .with_base_url(schema.base_url.clone())
            .with_timeout(Duration::from_secs(schema.timeout_secs)))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
