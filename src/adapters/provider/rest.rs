//! REST identity provider - Identity-Toolkit-style HTTP API.
//!
//! Talks to a provider exposing `accounts:signUp` and
//! `accounts:signInWithPassword` endpoints keyed by an API key. Wire
//! error codes (`EMAIL_EXISTS`, `INVALID_PASSWORD`, ...) are translated
//! to the canonical codes the domain mapping tables expect.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RestProviderConfig::new(api_key)
//!     .with_base_url("https://identitytoolkit.googleapis.com");
//!
//! let provider = RestIdentityProvider::new(config);
//! ```
//!
//! Sign-out has no server endpoint in this API family; the provider-side
//! session lives in the ID token, so signing out drops the cached token.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::auth::{codes, Identity, ProviderError};
use crate::ports::IdentityProvider;

const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

/// Configuration for the REST provider.
#[derive(Debug, Clone)]
pub struct RestProviderConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl RestProviderConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for building request URLs).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Identity provider backed by an Identity-Toolkit-style REST API.
pub struct RestIdentityProvider {
    config: RestProviderConfig,
    client: Client,
    /// ID token from the last successful credential exchange.
    id_token: RwLock<Option<Secret<String>>>,
}

impl RestIdentityProvider {
    /// Creates a new REST provider with the given configuration.
    pub fn new(config: RestProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            id_token: RwLock::new(None),
        }
    }

    /// Builds an accounts endpoint URL, e.g. `accounts:signUp`.
    fn accounts_url(&self, operation: &str) -> String {
        format!(
            "{}/v1/accounts:{}?key={}",
            self.config.base_url,
            operation,
            self.config.api_key()
        )
    }

    /// Posts credentials to an endpoint and parses the outcome.
    async fn exchange_credentials(
        &self,
        operation: &str,
        email: &str,
        password: &str,
    ) -> Result<Identity, ProviderError> {
        let body = CredentialRequest {
            email,
            password,
            return_secure_token: true,
        };

        let response = self
            .client
            .post(self.accounts_url(operation))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            let payload: CredentialResponse = response.json().await.map_err(transport_error)?;
            *self.id_token.write().unwrap() = Some(Secret::new(payload.id_token));
            tracing::debug!(%operation, email = %payload.email, "credential exchange succeeded");
            Ok(Identity::new(payload.email))
        } else {
            let status = response.status();
            let envelope: ApiErrorEnvelope = response
                .json()
                .await
                .unwrap_or_else(|_| ApiErrorEnvelope::unparseable(status.as_u16()));
            let error = translate_wire_code(&envelope.error.message);
            tracing::debug!(%operation, code = %error.code, "credential exchange rejected");
            Err(error)
        }
    }

    /// Returns true if a token from a previous exchange is cached.
    pub fn has_cached_token(&self) -> bool {
        self.id_token.read().unwrap().is_some()
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, ProviderError> {
        self.exchange_credentials("signUp", email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        self.exchange_credentials("signInWithPassword", email, password)
            .await
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        // The server keeps no session; dropping the token ends ours.
        *self.id_token.write().unwrap() = None;
        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    ProviderError::new("network-request-failed", err.to_string())
}

/// Translates a wire error message to a canonical `ProviderError`.
///
/// The API reports errors as an upper-snake token, sometimes followed by
/// detail text (`"WEAK_PASSWORD : Password should be at least 6
/// characters"`). Only the leading token selects the code; unknown
/// tokens are kebab-cased and passed through with the raw message.
fn translate_wire_code(raw: &str) -> ProviderError {
    let token = raw
        .split(|c: char| c == ':' || c.is_whitespace())
        .next()
        .unwrap_or_default();

    match token {
        "EMAIL_EXISTS" => ProviderError::new(
            codes::EMAIL_ALREADY_IN_USE,
            "an account already exists for this address",
        ),
        "EMAIL_NOT_FOUND" => {
            ProviderError::new(codes::USER_NOT_FOUND, "no account exists for this address")
        }
        "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            ProviderError::new(codes::WRONG_PASSWORD, "the password does not match")
        }
        "INVALID_EMAIL" | "MISSING_EMAIL" => {
            ProviderError::new(codes::INVALID_EMAIL, "the email address is malformed")
        }
        "WEAK_PASSWORD" | "MISSING_PASSWORD" => {
            ProviderError::new(codes::WEAK_PASSWORD, "the password is too weak")
        }
        other => ProviderError::new(other.to_ascii_lowercase().replace('_', "-"), raw),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialResponse {
    email: String,
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

impl ApiErrorEnvelope {
    fn unparseable(status: u16) -> Self {
        Self {
            error: ApiError {
                message: format!("UNPARSEABLE_RESPONSE http status {status}"),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_wire_codes_translate_to_canonical_codes() {
        assert_eq!(
            translate_wire_code("EMAIL_EXISTS").code,
            codes::EMAIL_ALREADY_IN_USE
        );
        assert_eq!(
            translate_wire_code("EMAIL_NOT_FOUND").code,
            codes::USER_NOT_FOUND
        );
        assert_eq!(
            translate_wire_code("INVALID_PASSWORD").code,
            codes::WRONG_PASSWORD
        );
        assert_eq!(
            translate_wire_code("INVALID_LOGIN_CREDENTIALS").code,
            codes::WRONG_PASSWORD
        );
        assert_eq!(translate_wire_code("INVALID_EMAIL").code, codes::INVALID_EMAIL);
        assert_eq!(translate_wire_code("WEAK_PASSWORD").code, codes::WEAK_PASSWORD);
    }

    #[test]
    fn detail_text_after_the_token_is_ignored_for_code_selection() {
        let err = translate_wire_code("WEAK_PASSWORD : Password should be at least 6 characters");
        assert_eq!(err.code, codes::WEAK_PASSWORD);
    }

    #[test]
    fn unknown_tokens_are_kebab_cased_with_raw_message() {
        let err = translate_wire_code("TOO_MANY_ATTEMPTS_TRY_LATER");
        assert_eq!(err.code, "too-many-attempts-try-later");
        assert_eq!(err.message, "TOO_MANY_ATTEMPTS_TRY_LATER");
    }

    #[test]
    fn credential_response_parses_the_wire_shape() {
        let payload: CredentialResponse = serde_json::from_str(
            r#"{"email":"a@b.com","idToken":"tok-123","refreshToken":"r","expiresIn":"3600"}"#,
        )
        .unwrap();
        assert_eq!(payload.email, "a@b.com");
        assert_eq!(payload.id_token, "tok-123");
    }

    #[test]
    fn error_envelope_parses_the_wire_shape() {
        let envelope: ApiErrorEnvelope = serde_json::from_str(
            r#"{"error":{"code":400,"message":"EMAIL_EXISTS","errors":[]}}"#,
        )
        .unwrap();
        assert_eq!(envelope.error.message, "EMAIL_EXISTS");
    }

    #[tokio::test]
    async fn sign_out_drops_the_cached_token_and_is_idempotent() {
        let provider = RestIdentityProvider::new(RestProviderConfig::new("test-key"));
        *provider.id_token.write().unwrap() = Some(Secret::new("tok".to_string()));

        provider.sign_out().await.unwrap();
        assert!(!provider.has_cached_token());

        // Second sign-out with no token still succeeds
        provider.sign_out().await.unwrap();
    }
}
