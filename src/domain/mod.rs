//! Domain layer containing the authentication business logic.
//!
//! # Module Organization
//!
//! - `auth` - Credentials, validation, session state, and provider
//!   error mapping

pub mod auth;
