//! AuthSessionController - the authentication request/response state machine.
//!
//! Holds the UI-facing state (input fields, last status message, current
//! session or none) and exposes register, login, and logout. Input is
//! validated locally; credential verification is delegated to the
//! `IdentityProvider` port; outcomes are surfaced through the status
//! message and the `UserNotifier` port.
//!
//! The state machine is just `Unauthenticated ⇄ Authenticated`:
//! successful register/login establishes a session, successful logout
//! clears it. Failed operations never leave the controller half-updated.
//!
//! All methods take `&mut self`, so one logical owner drives the
//! controller and each operation's completion runs exactly once on that
//! owner. There is deliberately no in-flight guard or retry policy; a
//! failed operation requires the user to re-invoke it.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::auth::{
    map_login_error, map_registration_error, AuthError, AuthOperation, Credentials, Session,
};
use crate::ports::{IdentityProvider, UserNotifier};

pub struct AuthSessionController {
    provider: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn UserNotifier>,
    credentials: Credentials,
    session: Option<Session>,
    status: Option<String>,
}

impl AuthSessionController {
    /// Creates a controller in the unauthenticated state with empty
    /// input fields and no status message.
    pub fn new(provider: Arc<dyn IdentityProvider>, notifier: Arc<dyn UserNotifier>) -> Self {
        Self {
            provider,
            notifier,
            credentials: Credentials::new(),
            session: None,
            status: None,
        }
    }

    /// Replaces the email input field.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.credentials.set_email(email);
    }

    /// Replaces the password input field.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.set_password(password);
    }

    pub fn email_input(&self) -> &str {
        self.credentials.email()
    }

    pub fn password_input(&self) -> &str {
        self.credentials.password()
    }

    /// The current session, or `None` when unauthenticated.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The outcome of the most recent completed operation, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Registers a new account with the held credentials.
    ///
    /// Validation (including the password-strength check) runs first;
    /// on failure the provider is never called and state is untouched.
    /// On provider success the session is established, the input fields
    /// are cleared, and the status message records the new account.
    pub async fn register(&mut self) -> Result<Session, AuthError> {
        self.check_input(AuthOperation::Register)?;

        let result = self
            .provider
            .create_account(self.credentials.email(), self.credentials.password())
            .await;

        match result {
            Ok(identity) => {
                let session = Session::establish(identity);
                info!(email = %session.email(), "account registered");
                self.status = Some(format!("user created: {}", session.email()));
                self.session = Some(session.clone());
                self.credentials.clear();
                self.notifier.notify("Success", "account created");
                Ok(session)
            }
            Err(err) => {
                warn!(code = %err.code, "registration rejected by provider");
                let message = map_registration_error(&err);
                self.status = Some(message.clone());
                self.notifier.notify("Error", &message);
                Err(AuthError::Provider {
                    code: err.code,
                    message,
                })
            }
        }
    }

    /// Signs in with the held credentials.
    ///
    /// Same flow as [`register`](Self::register) with the
    /// password-strength check skipped and the login mapping table.
    pub async fn login(&mut self) -> Result<Session, AuthError> {
        self.check_input(AuthOperation::Login)?;

        let result = self
            .provider
            .sign_in(self.credentials.email(), self.credentials.password())
            .await;

        match result {
            Ok(identity) => {
                let session = Session::establish(identity);
                info!(email = %session.email(), "signed in");
                self.status = Some(format!("welcome: {}", session.email()));
                self.session = Some(session.clone());
                self.credentials.clear();
                self.notifier.notify("Success", "signed in");
                Ok(session)
            }
            Err(err) => {
                warn!(code = %err.code, "sign-in rejected by provider");
                let message = map_login_error(&err);
                self.status = Some(message.clone());
                self.notifier.notify("Error", &message);
                Err(AuthError::Provider {
                    code: err.code,
                    message,
                })
            }
        }
    }

    /// Signs out via the provider and clears the session.
    ///
    /// Idempotent when already unauthenticated. On provider failure the
    /// session is left unchanged and only a generic status is surfaced;
    /// the next logout attempt starts from the same state.
    pub async fn logout(&mut self) -> Result<(), AuthError> {
        match self.provider.sign_out().await {
            Ok(()) => {
                info!("signed out");
                self.session = None;
                self.credentials.clear();
                self.status = Some("signed out".to_string());
                self.notifier.notify("Info", "signed out");
                Ok(())
            }
            Err(err) => {
                warn!(code = %err.code, "sign-out rejected by provider");
                self.status = Some("sign out failed".to_string());
                self.notifier.notify("Error", "sign out failed");
                Err(AuthError::Provider {
                    code: err.code,
                    message: "sign out failed".to_string(),
                })
            }
        }
    }

    /// Validates the held credentials, notifying the user on failure.
    ///
    /// Validation failures do not touch the status message; only
    /// completed provider operations do.
    fn check_input(&self, operation: AuthOperation) -> Result<(), AuthError> {
        if let Err(err) = self.credentials.validate(operation) {
            self.notifier.notify("Error", &err.to_string());
            return Err(err.into());
        }
        Ok(())
    }
}
