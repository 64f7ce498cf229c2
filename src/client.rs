use crate::context::ValueProvider;
use crate::error::{Error, Result};
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Environment variable read by [`Config::from_env`] for the base URI
pub const BASE_URI_ENV: &str = "BUSINESSOBJECTS_BASE_URI";
/// Environment variable read by [`Config::from_env`] for the auth token
pub const AUTH_TOKEN_ENV: &str = "BUSINESSOBJECTS_AUTH_TOKEN";

/// Create the HTTP client used by the default transport
pub fn create_rest_client(config: &Config) -> Result<Client> {
    ClientBuilder::new()
        .pool_max_idle_per_host(50)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| Error::Transport(Box::new(e)))
}

/// Configuration for the Business Objects client
#[derive(Debug, Clone)]
pub struct Config {
    /// Fallback for the base URI when a request carries no override
    pub base_uri_provider: Option<ValueProvider>,
    /// Fallback for the auth token when a request carries no override
    pub auth_token_provider: Option<ValueProvider>,
    /// Total request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_uri_provider: None,
            auth_token_provider: None,
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("businessobjects-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Create a configuration with default timeouts and no providers
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration whose providers read `BUSINESSOBJECTS_BASE_URI` and
    /// `BUSINESSOBJECTS_AUTH_TOKEN` on every call
    pub fn from_env() -> Self {
        Self::default()
            .with_base_uri_provider(ValueProvider::from_env(BASE_URI_ENV))
            .with_auth_token_provider(ValueProvider::from_env(AUTH_TOKEN_ENV))
    }

    pub fn with_base_uri_provider(mut self, provider: ValueProvider) -> Self {
        self.base_uri_provider = Some(provider);
        self
    }

    pub fn with_auth_token_provider(mut self, provider: ValueProvider) -> Self {
        self.auth_token_provider = Some(provider);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection establishment timeout
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert!(config.base_uri_provider.is_none());
        assert!(config.auth_token_provider.is_none());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("businessobjects-rs/"));
    }

    #[test]
    fn test_config_from_env_sets_providers() {
        let config = Config::from_env()
            .with_timeout(Duration::from_secs(30))
            .with_connect_timeout(Duration::from_secs(5));
        assert!(config.base_uri_provider.is_some());
        assert!(config.auth_token_provider.is_some());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_create_rest_client() {
        assert!(create_rest_client(&Config::new()).is_ok());
    }
}
