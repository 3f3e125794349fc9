//! Error taxonomy and provider error-code mapping.
//!
//! Two families: `ValidationError` for input problems detected locally
//! (these never reach the provider) and provider rejections, which arrive
//! as a raw `ProviderError` and are mapped to a fixed domain message per
//! operation. Codes the tables don't know pass the provider's message
//! through verbatim.

use thiserror::Error;

/// Canonical provider error codes.
///
/// Adapters translate their wire-level codes to these before the domain
/// mapping tables see them. Matching is case-sensitive.
pub mod codes {
    pub const EMAIL_ALREADY_IN_USE: &str = "email-already-in-use";
    pub const INVALID_EMAIL: &str = "invalid-email";
    pub const WEAK_PASSWORD: &str = "weak-password";
    pub const USER_NOT_FOUND: &str = "user-not-found";
    pub const WRONG_PASSWORD: &str = "wrong-password";
}

/// Input problems detected locally, before any provider call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email or password field is blank.
    #[error("please enter email and password")]
    EmptyFields,

    /// Email does not match the `local@domain.tld` shape.
    #[error("please enter a valid email")]
    InvalidEmail,

    /// Password is under six characters (registration only).
    #[error("password must be at least 6 characters")]
    WeakPassword,
}

/// Raw rejection from the identity provider.
///
/// `code` is the canonical kebab-case code; `message` is the provider's
/// own human-readable text, used verbatim when no table entry matches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("provider rejected request ({code}): {message}")]
pub struct ProviderError {
    pub code: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced by controller operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Input rejected locally; the provider was never called.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The provider rejected the request. `message` is already mapped
    /// to the domain wording.
    #[error("{message}")]
    Provider { code: String, message: String },
}

/// Maps a provider rejection of `create_account` to the domain message.
pub fn map_registration_error(err: &ProviderError) -> String {
    match err.code.as_str() {
        codes::EMAIL_ALREADY_IN_USE => "email already in use".to_string(),
        codes::INVALID_EMAIL => "invalid email".to_string(),
        codes::WEAK_PASSWORD => "password too weak".to_string(),
        _ => err.message.clone(),
    }
}

/// Maps a provider rejection of `sign_in` to the domain message.
pub fn map_login_error(err: &ProviderError) -> String {
    match err.code.as_str() {
        codes::USER_NOT_FOUND => "user not found".to_string(),
        codes::WRONG_PASSWORD => "incorrect password".to_string(),
        codes::INVALID_EMAIL => "invalid email".to_string(),
        _ => err.message.clone(),
    }
}
