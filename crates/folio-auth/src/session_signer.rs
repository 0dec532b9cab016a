use crate::{AuthError, Claims, Result as AuthErrorResult, SessionToken};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{EncodingKey, Header, encode};

/// Issues signed session tokens (HS256).
pub struct SessionSigner {
    encoding_key: EncodingKey,
    ttl_secs: u64,
}

impl SessionSigner {
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    /// Issue a session token for an authenticated operator.
    #[track_caller]
    pub fn issue(&self, email: &str) -> AuthErrorResult<SessionToken> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: email.to_string(),
            exp: now + self.ttl_secs as i64,
            iat: now,
        };

        let token =
            encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
                AuthError::JwtEncode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        Ok(SessionToken {
            token,
            max_age_secs: self.ttl_secs,
        })
    }
}
