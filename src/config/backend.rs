//! Diagnostic backend connection configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::http::RestClientConfig;

/// Connection settings for the diagnostic backend services
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl BackendConfig {
    /// Builds the REST client configuration for the adapters
    pub fn rest_client(&self) -> RestClientConfig {
        RestClientConfig::new(&self.base_url)
            .with_timeout(Duration::from_secs(self.request_timeout_secs))
    }

    /// Validate backend configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("backend.base_url"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBackendUrl);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_request_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, timeout: u64) -> BackendConfig {
        BackendConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: timeout,
            log_level: default_log_level(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(config("https://api.sereine.app", 10).validate().is_ok());
    }

    #[test]
    fn empty_base_url_fails() {
        assert!(config("", 10).validate().is_err());
    }

    #[test]
    fn non_http_base_url_fails() {
        assert!(config("ftp://api.sereine.app", 10).validate().is_err());
    }

    #[test]
    fn zero_timeout_fails() {
        assert!(config("https://api.sereine.app", 0).validate().is_err());
    }

    #[test]
    fn rest_client_carries_timeout() {
        let rest = config("https://api.sereine.app", 20).rest_client();
        assert_eq!(rest.timeout, Duration::from_secs(20));
    }
}
