use crate::error::Result;
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Create the HTTP client used for fax.to requests
/// with connection pooling and the timeouts from `config`
pub fn create_fax_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new()
        .pool_max_idle_per_host(50)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()?;
    Ok(client)
}

/// Configuration for the fax.to client
#[derive(Debug, Clone)]
pub struct Config {
    /// URL scheme (http or https)
    pub scheme: String,
    /// API host
    pub host: String,
    /// Path prefix in front of every mode, without surrounding slashes
    pub base_path: String,
    /// Enable debug logging of every dispatched request
    pub debug: bool,
    /// Total request timeout; uploads share it, so keep it generous
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scheme: "https".to_string(),
            host: "fax.to".to_string(),
            base_path: "api/v1".to_string(),
            debug: false,
            timeout: Duration::from_secs(300), // 5 minutes
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Create a new configuration with the given scheme and host
    pub fn new(scheme: String, host: String) -> Self {
        Config {
            scheme,
            host,
            ..Config::default()
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Set debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Get the base URL that modes are appended to
    pub fn base_url(&self) -> String {
        let path = self.base_path.trim_matches('/');
        if path.is_empty() {
            format!("{}://{}/", self.scheme, self.host)
        } else {
            format!("{}://{}/{}/", self.scheme, self.host, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(Config::default().base_url(), "https://fax.to/api/v1/");
    }

    #[test]
    fn test_custom_config() {
        let config = Config::new("http".to_string(), "localhost:8080".to_string())
            .with_base_path("/")
            .with_debug(true);
        assert_eq!(config.base_url(), "http://localhost:8080/");
        assert!(config.debug);
        assert_eq!(config.timeout, Duration::from_secs(300));
    }
}
