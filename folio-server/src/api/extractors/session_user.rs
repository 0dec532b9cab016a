//! Axum extractor for session-authenticated requests

use crate::{ApiError, AppState};

use std::future::Future;
use std::panic::Location;

use axum::http::HeaderMap;
use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Extracts the signed-in operator's email from the session cookie.
///
/// API handlers use this directly and reject with 401; page handlers
/// call [`session_email`] and redirect to the login form instead.
pub struct SessionUser(pub String);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            session_email(state, &parts.headers).ok_or_else(|| ApiError::Unauthorized {
                message: "Missing or invalid session".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
            .map(SessionUser)
        }
    }
}

/// Validate the session cookie and return the operator email, if any.
pub fn session_email(state: &AppState, headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;

    for pair in cookie_header.split(';') {
        let Some((name, value)) = pair.trim().split_once('=') else {
            continue;
        };
        if name != state.cookie_name {
            continue;
        }
        match state.sessions.validate(value) {
            Ok(claims) => return Some(claims.sub),
            Err(e) => {
                log::debug!("Rejected session cookie: {}", e);
                return None;
            }
        }
    }

    None
}
