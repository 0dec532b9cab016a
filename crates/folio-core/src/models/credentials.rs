//! Operator credentials submitted through the login form.

use crate::FieldErrors;

use serde::Deserialize;

const PASSWORD_MIN_CHARS: usize = 6;
const PASSWORD_MAX_CHARS: usize = 100;

/// Transient credential pair. Never persisted; handed to the
/// authenticator only after validation passes.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Validate email format and password length.
    ///
    /// Rejection here guarantees the authenticator is never called with
    /// malformed input.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.email.is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.add("email", "Invalid email address");
        }

        let password_chars = self.password.chars().count();
        if password_chars < PASSWORD_MIN_CHARS {
            errors.add("password", "Password must be at least 6 characters");
        } else if password_chars > PASSWORD_MAX_CHARS {
            errors.add("password", "Password is too long");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
