//! Identity provider port.
//!
//! The provider owns credential verification, account storage, token
//! issuance, refresh, and whatever persistence it wants - none of that
//! is reimplemented here. The controller only needs the three calls
//! below and an error code it can map to a domain message.
//!
//! # Contract
//!
//! Implementations must:
//! - Resolve each call exactly once, with either an `Identity` (or `()`
//!   for sign-out) or a `ProviderError`
//! - Use the canonical codes from `domain::auth::codes` where one fits,
//!   translating their own wire-level codes
//! - Never panic on malformed provider responses; fold them into a
//!   `ProviderError` instead

use async_trait::async_trait;

use crate::domain::auth::{Identity, ProviderError};

/// External service that verifies credentials and issues identity records.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Creates a new account for the given credentials.
    async fn create_account(&self, email: &str, password: &str)
        -> Result<Identity, ProviderError>;

    /// Signs in with existing credentials.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError>;

    /// Ends the provider-side session, if any.
    async fn sign_out(&self) -> Result<(), ProviderError>;
}
