//! Console notifier for the CLI surface.

use crate::ports::UserNotifier;

/// Prints notifications as `title: message` lines on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl UserNotifier for ConsoleNotifier {
    fn notify(&self, title: &str, message: &str) {
        println!("{title}: {message}");
    }
}
