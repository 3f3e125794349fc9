//! Identity provider adapters.
//!
//! Implementations of the `IdentityProvider` port:
//!
//! - `mock` - In-memory implementation for tests, no external services
//! - `rest` - Identity-Toolkit-style HTTP API implementation

mod mock;
mod rest;

pub use mock::MockIdentityProvider;
pub use rest::{RestIdentityProvider, RestProviderConfig};
