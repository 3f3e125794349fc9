//! Session and identity records.

use chrono::{DateTime, Utc};

/// Identity record returned by the provider on a successful
/// registration or sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Locally held record of the currently authenticated identity.
///
/// Exists only between a successful register/login and the next
/// successful logout. Not persisted; the provider may keep its own
/// session artifacts, but those never surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    email: String,
    signed_in_at: DateTime<Utc>,
}

impl Session {
    /// Establishes a session for the identity the provider returned.
    pub fn establish(identity: Identity) -> Self {
        Self {
            email: identity.email,
            signed_in_at: Utc::now(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn signed_in_at(&self) -> DateTime<Utc> {
        self.signed_in_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn establish_carries_the_identity_email() {
        let session = Session::establish(Identity::new("a@b.com"));
        assert_eq!(session.email(), "a@b.com");
        assert!(session.signed_in_at() <= Utc::now());
    }
}
