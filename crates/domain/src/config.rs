//! Client configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::errors::{MarketplaceError, Result};
use crate::types::{Credentials, Environment};

/// Options recognised when constructing a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub consumer_key: String,
    pub consumer_secret: String,
    #[serde(default)]
    pub environment: Environment,
    /// Replaces the environment's base URL (staging hosts, local mocks).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl ClientConfig {
    /// Configuration with defaults for everything but the credentials.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            environment: Environment::default(),
            base_url: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: None,
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Check the configuration can produce a working client.
    ///
    /// # Errors
    ///
    /// Returns `MarketplaceError::Config` for empty credentials, a zero poll
    /// interval or zero request timeout, or an empty base URL override.
    pub fn validate(&self) -> Result<()> {
        if self.consumer_key.trim().is_empty() {
            return Err(MarketplaceError::Config("consumer_key must not be empty".into()));
        }
        if self.consumer_secret.is_empty() {
            return Err(MarketplaceError::Config("consumer_secret must not be empty".into()));
        }
        if self.poll_interval_ms == 0 {
            return Err(MarketplaceError::Config("poll_interval_ms must be positive".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(MarketplaceError::Config("request_timeout_secs must be positive".into()));
        }
        if matches!(self.base_url.as_deref(), Some(url) if url.trim().is_empty()) {
            return Err(MarketplaceError::Config("base_url override must not be empty".into()));
        }
        Ok(())
    }

    /// Base URL every endpoint is joined onto, with a trailing slash.
    pub fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) if url.ends_with('/') => url.clone(),
            Some(url) => format!("{url}/"),
            None => self.environment.base_url().to_string(),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.consumer_key.clone(), self.consumer_secret.clone())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
