//! Authentication domain types.
//!
//! Everything in this module is pure: credentials and their validation,
//! the session record, the error taxonomy, and the provider-code mapping
//! tables. No external collaborator dependencies - any identity provider
//! can populate these types via the `IdentityProvider` port.

mod credentials;
mod errors;
mod session;

pub use credentials::{validate, AuthOperation, Credentials};
pub use errors::{
    codes, map_login_error, map_registration_error, AuthError, ProviderError, ValidationError,
};
pub use session::{Identity, Session};
