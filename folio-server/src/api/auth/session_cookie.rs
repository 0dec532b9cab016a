//! Session cookie construction.
//!
//! Tokens are HttpOnly and SameSite=Lax; sign-out replaces the cookie
//! with an immediately-expiring empty one.

use folio_auth::SessionToken;

/// Build the Set-Cookie value for a fresh session.
pub fn session_cookie(name: &str, session: &SessionToken) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        name, session.token, session.max_age_secs
    )
}

/// Build the Set-Cookie value that clears the session.
pub fn clear_session_cookie(name: &str) -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", name)
}
