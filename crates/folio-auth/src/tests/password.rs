use crate::AuthError;
use crate::password::{hash_password, verify_password};

#[test]
fn given_correct_password_when_verified_then_passes() {
    let hash = hash_password("hunter22").unwrap();
    assert!(verify_password("hunter22", &hash).is_ok());
}

#[test]
fn given_wrong_password_when_verified_then_invalid_credentials() {
    let hash = hash_password("hunter22").unwrap();
    let err = verify_password("hunter23", &hash).unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials { .. }));
    assert_eq!(err.code(), "invalid_credentials");
}

#[test]
fn given_malformed_stored_hash_when_verified_then_hash_error() {
    let err = verify_password("hunter22", "not-a-phc-hash").unwrap_err();
    assert!(matches!(err, AuthError::PasswordHash { .. }));
}

#[test]
fn given_same_password_when_hashed_twice_then_salts_differ() {
    let a = hash_password("hunter22").unwrap();
    let b = hash_password("hunter22").unwrap();
    assert_ne!(a, b);
    assert!(a.starts_with("$argon2"));
}
