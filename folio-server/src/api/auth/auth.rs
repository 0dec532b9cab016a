//! Sign-in and sign-out handlers.
//!
//! Validation failures never reach the authenticator; authenticator
//! failures map to a fixed set of user-facing messages keyed by the
//! categorical error code.

use crate::api::auth::session_cookie::{clear_session_cookie, session_cookie};
use crate::{ApiError, ApiResult, AppState, SignInRequest, SignInResponse};

use folio_auth::AuthError;
use folio_core::Credentials;

use std::panic::Location;

use axum::{
    Json,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;

/// Map a sign-in failure to its user-facing message.
///
/// Unrecognized codes collapse to a generic message; the underlying
/// error has already been logged at the call site.
pub fn sign_in_failure_message(error: &AuthError) -> &'static str {
    match error.code() {
        "invalid_credentials" => "Invalid credentials.",
        "over_request_rate_limit" => "Too many requests. Try again later.",
        _ => "Something went wrong.",
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/sign-in
///
/// Validate credentials, then exchange them for a session cookie.
pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> ApiResult<Response> {
    let credentials = Credentials {
        email: request.email,
        password: request.password,
    };

    if let Err(errors) = credentials.validate() {
        let field = errors.iter().next().map(|(path, _)| path.to_string());
        return Err(ApiError::Validation {
            message: errors.to_string(),
            field,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    match state
        .authenticator
        .sign_in_with_password(&credentials.email, &credentials.password)
    {
        Ok(session) => {
            log::info!("Operator signed in: {}", credentials.email);
            let cookie = session_cookie(&state.cookie_name, &session);
            Ok((
                [(SET_COOKIE, cookie)],
                Json(SignInResponse {
                    email: credentials.email,
                }),
            )
                .into_response())
        }
        Err(e) => {
            log::error!("Sign-in failed ({}): {}", e.code(), e);
            let message = sign_in_failure_message(&e).to_string();
            Err(match e {
                AuthError::InvalidCredentials { .. } => ApiError::Unauthorized {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                },
                AuthError::RateLimitExceeded { .. } => ApiError::RateLimited {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => ApiError::Internal {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                },
            })
        }
    }
}

/// POST /api/v1/auth/sign-out
///
/// Sessions are stateless tokens; signing out clears the cookie.
pub async fn sign_out(State(state): State<AppState>) -> Response {
    let cookie = clear_session_cookie(&state.cookie_name);
    ([(SET_COOKIE, cookie)], Json(serde_json::json!({ "signed_out": true }))).into_response()
}
