//! Client configuration.
//!
//! # Environment Variables
//!
//! [`ClientConfig::from_env`] starts from the defaults and applies:
//!
//! - `DRAGONBALL_BASE_URL` - API base URL (e.g., `https://dragonball.keepcoding.education`)
//! - `DRAGONBALL_LOGIN_PATH` - Path of the login endpoint, relative to the base URL
//! - `DRAGONBALL_TIMEOUT_SECS` - Request timeout in seconds

use serde::{Deserialize, Serialize};

use crate::{DragonBallError, Result};

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://dragonball.keepcoding.education";

/// Path of the hero list endpoint.
pub const HEROES_PATH: &str = "/api/heros/all";

/// Path of the transformation list endpoint.
pub const TRANSFORMATIONS_PATH: &str = "/api/heros/tranformations";

const ENV_BASE_URL: &str = "DRAGONBALL_BASE_URL";
const ENV_LOGIN_PATH: &str = "DRAGONBALL_LOGIN_PATH";
const ENV_TIMEOUT_SECS: &str = "DRAGONBALL_TIMEOUT_SECS";

/// Configuration for [`NetworkClient`](crate::NetworkClient) and its transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Login endpoint path. Empty means the service root.
    #[serde(default)]
    pub login_path: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent sent by the HTTP transport.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("dragonball-rs/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: String::new(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at `base_url` with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults. An unparsable timeout is ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(url);
        }

        if let Some(path) = lookup(ENV_LOGIN_PATH) {
            config = config.with_login_path(path);
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            if let Ok(secs) = timeout.trim().parse::<u64>() {
                config = config.with_timeout(secs);
            }
        }

        config
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the login endpoint path.
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Check that the configuration can be used to build requests.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(DragonBallError::invalid_config(
                "base_url",
                "base URL cannot be empty",
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(DragonBallError::invalid_config(
                "base_url",
                format!("unsupported scheme in {}", self.base_url),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(DragonBallError::invalid_config(
                "timeout_secs",
                "timeout must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Build the full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Full URL of the login endpoint.
    pub fn login_url(&self) -> String {
        self.url(&self.login_path)
    }
}
