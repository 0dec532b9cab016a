pub mod authenticator;
pub mod claims;
pub mod error;
pub mod login_rate_limiter;
pub mod password;
pub mod rate_limit_config;
pub mod session_signer;
pub mod session_token;
pub mod session_validator;

pub use authenticator::Authenticator;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use login_rate_limiter::LoginRateLimiter;
pub use rate_limit_config::RateLimitConfig;
pub use session_signer::SessionSigner;
pub use session_token::SessionToken;
pub use session_validator::SessionValidator;

#[cfg(test)]
mod tests;
