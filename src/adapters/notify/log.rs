//! Tracing-backed notifier.

use crate::ports::UserNotifier;

/// Routes user notifications into the tracing log.
///
/// Useful for headless deployments and as a default when no interactive
/// surface is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl UserNotifier for TracingNotifier {
    fn notify(&self, title: &str, message: &str) {
        tracing::info!(%title, %message, "user notification");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_is_safe_without_a_subscriber() {
        TracingNotifier::new().notify("Info", "signed out");
    }
}
