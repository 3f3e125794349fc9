//! Transient user-entered credentials and their validation.
//!
//! Validation runs locally, in a fixed order, before any provider call is
//! made: empty-field check, email shape check, then (registration only) a
//! minimum password length. The first failure short-circuits.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LEN: usize = 6;

/// Email shape: non-empty local part, exactly one `@`, at least one `.`
/// in the domain with characters on both sides, no whitespace anywhere.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Which operation the credentials are being validated for.
///
/// Login skips the password-strength check; an existing account's password
/// is whatever the provider accepted at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    Register,
    Login,
}

/// Validates an email/password pair for the given operation.
///
/// Checks run in a fixed order and short-circuit on the first failure:
///
/// 1. both fields non-blank, else [`ValidationError::EmptyFields`]
/// 2. email matches the `local@domain.tld` shape, else
///    [`ValidationError::InvalidEmail`]
/// 3. password at least six characters (`Register` only), else
///    [`ValidationError::WeakPassword`]
///
/// No side effects and no provider call; malformed input costs nothing
/// on the network.
pub fn validate(email: &str, password: &str, operation: AuthOperation) -> Result<(), ValidationError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::EmptyFields);
    }

    if !EMAIL_SHAPE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if operation == AuthOperation::Register && password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::WeakPassword);
    }

    Ok(())
}

/// Transient email/password pair, held only while the user is typing.
///
/// The controller clears this on every successful register/login/logout
/// transition; it never outlives the operation that consumed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Creates an empty credentials record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the email input field.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Replaces the password input field.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Clears both fields.
    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
    }

    /// Validates the held pair for the given operation.
    pub fn validate(&self, operation: AuthOperation) -> Result<(), ValidationError> {
        validate(&self.email, &self.password, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn well_formed_email_and_password_pass_both_operations() {
        assert!(validate("a@b.com", "secret1", AuthOperation::Register).is_ok());
        assert!(validate("a@b.com", "secret1", AuthOperation::Login).is_ok());
        assert!(validate("user@mail.example.com", "hunter2", AuthOperation::Register).is_ok());
    }

    #[test]
    fn empty_email_fails_first() {
        // EmptyFields wins even though the password is also weak
        assert_eq!(
            validate("", "abc", AuthOperation::Register),
            Err(ValidationError::EmptyFields)
        );
    }

    #[test]
    fn blank_fields_count_as_empty() {
        assert_eq!(
            validate("   ", "secret1", AuthOperation::Login),
            Err(ValidationError::EmptyFields)
        );
        assert_eq!(
            validate("a@b.com", " \t ", AuthOperation::Login),
            Err(ValidationError::EmptyFields)
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "plainaddress",
            "missing-domain@",
            "@missing-local.com",
            "no-tld@domain",
            "two@@signs.com",
            "two@signs@again.com",
            "spaces in@local.com",
            "trailing-dot@domain.",
            "a@b",
        ] {
            assert_eq!(
                validate(email, "secret1", AuthOperation::Login),
                Err(ValidationError::InvalidEmail),
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn subdomains_are_accepted() {
        assert!(validate("a@b.c.d", "secret1", AuthOperation::Login).is_ok());
    }

    #[test]
    fn short_password_rejected_only_at_registration() {
        assert_eq!(
            validate("a@b.com", "short", AuthOperation::Register),
            Err(ValidationError::WeakPassword)
        );
        assert!(validate("a@b.com", "short", AuthOperation::Login).is_ok());
    }

    #[test]
    fn six_character_password_is_accepted() {
        assert!(validate("a@b.com", "sixchr", AuthOperation::Register).is_ok());
    }

    #[test]
    fn credentials_clear_empties_both_fields() {
        let mut credentials = Credentials::new();
        credentials.set_email("a@b.com");
        credentials.set_password("secret1");
        credentials.clear();
        assert_eq!(credentials.email(), "");
        assert_eq!(credentials.password(), "");
    }

    proptest! {
        #[test]
        fn any_pair_with_a_blank_field_yields_empty_fields(
            email in prop_oneof![Just(String::new()), " {0,4}".prop_map(String::from)],
            password in ".*",
        ) {
            prop_assert_eq!(
                validate(&email, &password, AuthOperation::Register),
                Err(ValidationError::EmptyFields)
            );
        }

        #[test]
        fn strings_without_an_at_sign_are_invalid_emails(
            email in "[a-z0-9.]{1,20}",
            password in "[a-z0-9]{6,12}",
        ) {
            prop_assert_eq!(
                validate(&email, &password, AuthOperation::Login),
                Err(ValidationError::InvalidEmail)
            );
        }

        #[test]
        fn short_passwords_split_on_operation(
            local in "[a-z0-9]{1,8}",
            password in "[a-z0-9]{1,5}",
        ) {
            let email = format!("{local}@example.com");
            prop_assert_eq!(
                validate(&email, &password, AuthOperation::Register),
                Err(ValidationError::WeakPassword)
            );
            prop_assert_eq!(validate(&email, &password, AuthOperation::Login), Ok(()));
        }
    }
}
