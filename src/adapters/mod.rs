//! Adapters - Implementations of port interfaces.
//!
//! - `provider` - Identity provider implementations (REST, in-memory mock)
//! - `notify` - User notification implementations (tracing log, console)

pub mod notify;
pub mod provider;

pub use notify::{ConsoleNotifier, TracingNotifier};
pub use provider::{MockIdentityProvider, RestIdentityProvider, RestProviderConfig};
