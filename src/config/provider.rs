//! Identity provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ConfigValidationError;

/// Identity provider configuration
///
/// The API key and project endpoint are opaque to the controller; they
/// only reach the REST adapter.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Provider API key
    api_key: Secret<String>,

    /// Base URL of the provider API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Exposes the API key for adapter construction.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api_key.expose_secret().is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "SIGNON__PROVIDER__API_KEY",
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: Secret::new(String::new()),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://identitytoolkit.googleapis.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> ProviderConfig {
        ProviderConfig {
            api_key: Secret::new("test-key".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_point_at_the_public_endpoint() {
        let config = ProviderConfig::default();
        assert_eq!(config.base_url, "https://identitytoolkit.googleapis.com");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn validation_requires_an_api_key() {
        assert!(matches!(
            ProviderConfig::default().validate(),
            Err(ConfigValidationError::MissingRequired(_))
        ));
        assert!(config_with_key().validate().is_ok());
    }

    #[test]
    fn validation_rejects_non_http_base_urls() {
        let config = ProviderConfig {
            base_url: "ftp://example.com".to_string(),
            ..config_with_key()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl)
        ));
    }

    #[test]
    fn validation_rejects_a_zero_timeout() {
        let config = ProviderConfig {
            timeout_secs: 0,
            ..config_with_key()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }
}
