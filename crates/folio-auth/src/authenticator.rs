//! Password sign-in against the configured operator account.

use crate::{
    AuthError, LoginRateLimiter, RateLimitConfig, Result as AuthErrorResult, SessionSigner,
    SessionToken, password,
};

use std::panic::Location;

use error_location::ErrorLocation;

/// Verifies operator credentials and issues session tokens.
///
/// There is a single operator account, provisioned via configuration as
/// an email plus an Argon2 PHC hash. Sign-in attempts are rate limited
/// before any credential check runs.
pub struct Authenticator {
    admin_email: String,
    admin_password_hash: String,
    signer: SessionSigner,
    rate_limiter: LoginRateLimiter,
}

impl Authenticator {
    pub fn new(
        admin_email: String,
        admin_password_hash: String,
        signer: SessionSigner,
        rate_limit: RateLimitConfig,
    ) -> Self {
        Self {
            admin_email,
            admin_password_hash,
            signer,
            rate_limiter: LoginRateLimiter::new(rate_limit),
        }
    }

    /// Sign in with email and password.
    ///
    /// Returns a session token on success. Failures carry a categorical
    /// code (`invalid_credentials`, `over_request_rate_limit`, ...) via
    /// [`AuthError::code`].
    #[track_caller]
    pub fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<SessionToken> {
        self.rate_limiter.check()?;

        if !email.eq_ignore_ascii_case(&self.admin_email) {
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        password::verify_password(password, &self.admin_password_hash)?;

        self.signer.issue(&self.admin_email)
    }
}
