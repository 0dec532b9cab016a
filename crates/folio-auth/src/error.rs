use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Rate limit exceeded: {limit} requests per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing session cookie {location}")]
    MissingSession { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hash error: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Categorical error code for the action layer's message mapping.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "invalid_credentials",
            Self::RateLimitExceeded { .. } => "over_request_rate_limit",
            Self::InvalidToken { .. } => "invalid_token",
            Self::TokenExpired { .. } => "token_expired",
            Self::MissingSession { .. } => "missing_session",
            Self::JwtDecode { .. } => "jwt_decode_failed",
            Self::JwtEncode { .. } => "jwt_encode_failed",
            Self::PasswordHash { .. } => "password_hash_error",
            Self::InvalidClaim { .. } => "invalid_claim",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
