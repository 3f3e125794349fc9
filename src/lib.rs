//! Signon - email/password authentication session controller.
//!
//! This crate owns the application logic around authentication: local input
//! validation, the unauthenticated/authenticated state machine, and provider
//! error-code mapping. Credential verification itself is delegated to an
//! external identity provider behind the `IdentityProvider` port.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
