//! Shared configuration for the REST client adapters.

use reqwest::Client;
use std::time::Duration;

/// Connection settings for the diagnostic backend.
#[derive(Debug, Clone)]
pub struct RestClientConfig {
    /// Base URL of the backend (e.g. "https://api.sereine.app").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl RestClientConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the reqwest client for this configuration.
    pub fn build_client(&self) -> Client {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to create HTTP client")
    }

    /// Joins a path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let config = RestClientConfig::new("https://api.sereine.app/");
        assert_eq!(
            config.url("/diagnostic/questions"),
            "https://api.sereine.app/diagnostic/questions"
        );
    }

    #[test]
    fn default_timeout_is_ten_seconds() {
        let config = RestClientConfig::new("http://localhost:3000");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
