//! Mock identity provider for testing.
//!
//! Keeps accounts in memory and behaves like a real provider would:
//! duplicate registration yields `email-already-in-use`, unknown emails
//! yield `user-not-found`, bad passwords yield `wrong-password`. Each
//! operation can also be forced to fail with an arbitrary error, and
//! call counts are tracked so tests can assert an operation never
//! reached the provider.
//!
//! # Example
//!
//! ```ignore
//! use signon::adapters::MockIdentityProvider;
//!
//! let provider = MockIdentityProvider::new().with_account("a@b.com", "secret1");
//!
//! let identity = provider.sign_in("a@b.com", "secret1").await.unwrap();
//! assert_eq!(identity.email, "a@b.com");
//! assert_eq!(provider.sign_in_calls(), 1);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::auth::{codes, Identity, ProviderError};
use crate::ports::IdentityProvider;

/// In-memory identity provider for tests.
#[derive(Debug, Default)]
pub struct MockIdentityProvider {
    /// Registered accounts, email to password
    accounts: RwLock<HashMap<String, String>>,
    /// Forced errors per operation (for error-path testing)
    force_create_error: RwLock<Option<ProviderError>>,
    force_sign_in_error: RwLock<Option<ProviderError>>,
    force_sign_out_error: RwLock<Option<ProviderError>>,
    create_calls: AtomicUsize,
    sign_in_calls: AtomicUsize,
    sign_out_calls: AtomicUsize,
}

impl MockIdentityProvider {
    /// Creates an empty mock provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an existing account.
    pub fn with_account(self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.accounts
            .write()
            .unwrap()
            .insert(email.into(), password.into());
        self
    }

    /// Forces every `create_account` call to fail with the given error.
    pub fn with_create_account_error(self, error: ProviderError) -> Self {
        *self.force_create_error.write().unwrap() = Some(error);
        self
    }

    /// Forces every `sign_in` call to fail with the given error.
    pub fn with_sign_in_error(self, error: ProviderError) -> Self {
        *self.force_sign_in_error.write().unwrap() = Some(error);
        self
    }

    /// Forces every `sign_out` call to fail with the given error.
    pub fn with_sign_out_error(self, error: ProviderError) -> Self {
        *self.force_sign_out_error.write().unwrap() = Some(error);
        self
    }

    /// Number of `create_account` calls observed.
    pub fn create_account_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Number of `sign_in` calls observed.
    pub fn sign_in_calls(&self) -> usize {
        self.sign_in_calls.load(Ordering::SeqCst)
    }

    /// Number of `sign_out` calls observed.
    pub fn sign_out_calls(&self) -> usize {
        self.sign_out_calls.load(Ordering::SeqCst)
    }

    /// Returns true if an account exists for the email.
    pub fn has_account(&self, email: &str) -> bool {
        self.accounts.read().unwrap().contains_key(email)
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, ProviderError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.force_create_error.read().unwrap().clone() {
            return Err(error);
        }

        let mut accounts = self.accounts.write().unwrap();
        if accounts.contains_key(email) {
            return Err(ProviderError::new(
                codes::EMAIL_ALREADY_IN_USE,
                "an account already exists for this address",
            ));
        }
        accounts.insert(email.to_string(), password.to_string());
        Ok(Identity::new(email))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.force_sign_in_error.read().unwrap().clone() {
            return Err(error);
        }

        let accounts = self.accounts.read().unwrap();
        match accounts.get(email) {
            None => Err(ProviderError::new(
                codes::USER_NOT_FOUND,
                "no account exists for this address",
            )),
            Some(stored) if stored != password => Err(ProviderError::new(
                codes::WRONG_PASSWORD,
                "the password does not match",
            )),
            Some(_) => Ok(Identity::new(email)),
        }
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.force_sign_out_error.read().unwrap().clone() {
            return Err(error);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_account_registers_and_rejects_duplicates() {
        let provider = MockIdentityProvider::new();

        let identity = provider.create_account("a@b.com", "secret1").await.unwrap();
        assert_eq!(identity.email, "a@b.com");
        assert!(provider.has_account("a@b.com"));

        let err = provider
            .create_account("a@b.com", "other-pw")
            .await
            .unwrap_err();
        assert_eq!(err.code, codes::EMAIL_ALREADY_IN_USE);
        assert_eq!(provider.create_account_calls(), 2);
    }

    #[tokio::test]
    async fn sign_in_distinguishes_unknown_user_from_bad_password() {
        let provider = MockIdentityProvider::new().with_account("a@b.com", "secret1");

        let err = provider.sign_in("nobody@b.com", "secret1").await.unwrap_err();
        assert_eq!(err.code, codes::USER_NOT_FOUND);

        let err = provider.sign_in("a@b.com", "wrongpass").await.unwrap_err();
        assert_eq!(err.code, codes::WRONG_PASSWORD);

        let identity = provider.sign_in("a@b.com", "secret1").await.unwrap();
        assert_eq!(identity.email, "a@b.com");
    }

    #[tokio::test]
    async fn forced_errors_override_normal_behavior() {
        let provider = MockIdentityProvider::new()
            .with_sign_out_error(ProviderError::new("network-request-failed", "offline"));

        let err = provider.sign_out().await.unwrap_err();
        assert_eq!(err.code, "network-request-failed");
        assert_eq!(provider.sign_out_calls(), 1);
    }
}
