//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IdentityProvider` - Credential verification and account management
//! - `UserNotifier` - User-facing notification presentation

mod identity_provider;
mod notifier;

pub use identity_provider::IdentityProvider;
pub use notifier::UserNotifier;
