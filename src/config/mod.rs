//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `SIGNON` prefix and nested values use `__` as the separator.
//!
//! # Example
//!
//! ```no_run
//! use signon::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod provider;

pub use error::{ConfigError, ConfigValidationError};
pub use provider::ProviderConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Identity provider configuration (API key, endpoint)
    pub provider: ProviderConfig,

    /// Log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads `SIGNON`-prefixed
    /// environment variables with `__` separating nested values:
    ///
    /// - `SIGNON__PROVIDER__API_KEY=...` -> `provider.api_key`
    /// - `SIGNON__PROVIDER__BASE_URL=...` -> `provider.base_url`
    /// - `SIGNON__LOG_LEVEL=debug` -> `log_level`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SIGNON")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if any value is semantically
    /// invalid (missing API key, non-HTTP base URL, zero timeout).
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.provider.validate()
    }
}

fn default_log_level() -> String {
    "signon=info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_level_scopes_to_the_crate() {
        assert_eq!(default_log_level(), "signon=info");
    }

    #[test]
    fn validate_delegates_to_the_provider_section() {
        let config = AppConfig {
            provider: ProviderConfig::default(),
            log_level: default_log_level(),
        };
        // Default provider config has no API key
        assert!(config.validate().is_err());
    }
}
