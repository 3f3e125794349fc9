//! User notification adapters.
//!
//! Implementations of the `UserNotifier` port:
//!
//! - `log` - Routes notifications into the tracing log
//! - `console` - Prints notifications to stdout (CLI surface)

mod console;
mod log;

pub use console::ConsoleNotifier;
pub use log::TracingNotifier;
