//! Application layer - the auth session controller.
//!
//! Orchestrates validation, provider calls, and state transitions. The
//! domain stays pure; everything with a side effect happens here.

mod controller;

pub use controller::AuthSessionController;
