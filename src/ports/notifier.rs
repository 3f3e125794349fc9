//! User notification port.
//!
//! The original surface showed platform-conditional alert dialogs; that
//! is pure presentation plumbing, so the controller only talks to this
//! fire-and-forget collaborator. Implementations decide how (and
//! whether) the pair is actually shown.

/// Presents a (title, message) pair to the user.
pub trait UserNotifier: Send + Sync {
    fn notify(&self, title: &str, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_notifier_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn UserNotifier) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn UserNotifier>>();
    }
}
