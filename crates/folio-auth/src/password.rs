//! Argon2 password hashing and verification.
//!
//! The operator account is provisioned with a PHC-format hash string in
//! configuration; the plaintext password only exists during sign-in.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use error_location::ErrorLocation;

/// Hash a password into a PHC string, for provisioning the operator
/// account and for test fixtures.
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash string.
///
/// A mismatch maps to `InvalidCredentials`; a malformed stored hash is a
/// provisioning problem and maps to `PasswordHash`.
#[track_caller]
pub fn verify_password(password: &str, stored_hash: &str) -> AuthErrorResult<()> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::PasswordHash {
        message: format!("stored hash is not valid PHC format: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|e| match e {
            password_hash::Error::Password => AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            },
            other => AuthError::PasswordHash {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        })
}
