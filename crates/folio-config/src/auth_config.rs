use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_COOKIE, DEFAULT_SESSION_TTL_SECS,
    MIN_SESSION_SECRET_BYTES,
};

use serde::Deserialize;

/// Operator account and session settings.
///
/// The secret and password hash normally arrive via environment
/// overrides (`FOLIO_SESSION_SECRET`, `FOLIO_ADMIN_PASSWORD_HASH`)
/// rather than the TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 secret for session tokens
    pub session_secret: Option<String>,
    /// Session (and cookie) lifetime
    pub session_ttl_secs: u64,
    /// Name of the session cookie
    pub cookie_name: String,
    /// Operator email
    pub admin_email: Option<String>,
    /// Argon2 PHC hash of the operator password
    pub admin_password_hash: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            cookie_name: String::from(DEFAULT_SESSION_COOKIE),
            admin_email: None,
            admin_password_hash: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.session_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.session_secret must be set (FOLIO_SESSION_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_SESSION_SECRET_BYTES => {
                return Err(ConfigError::auth(format!(
                    "auth.session_secret must be at least {} bytes",
                    MIN_SESSION_SECRET_BYTES
                )));
            }
            Some(_) => {}
        }

        match &self.admin_email {
            None => {
                return Err(ConfigError::auth(
                    "auth.admin_email must be set (FOLIO_ADMIN_EMAIL)",
                ));
            }
            Some(email) if !email.contains('@') => {
                return Err(ConfigError::auth("auth.admin_email is not an email address"));
            }
            Some(_) => {}
        }

        match &self.admin_password_hash {
            None => {
                return Err(ConfigError::auth(
                    "auth.admin_password_hash must be set (FOLIO_ADMIN_PASSWORD_HASH)",
                ));
            }
            Some(hash) if !hash.starts_with("$argon2") => {
                return Err(ConfigError::auth(
                    "auth.admin_password_hash must be an Argon2 PHC string",
                ));
            }
            Some(_) => {}
        }

        if self.session_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.session_ttl_secs must be > 0"));
        }
        if self.cookie_name.is_empty() {
            return Err(ConfigError::auth("auth.cookie_name cannot be empty"));
        }

        Ok(())
    }
}
