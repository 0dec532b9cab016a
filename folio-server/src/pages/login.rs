//! Login page and session handlers.

use crate::api::auth::auth::sign_in_failure_message;
use crate::api::auth::session_cookie::{clear_session_cookie, session_cookie};
use crate::api::extractors::session_user::session_email;
use crate::pages::layout::{escape_html, field_error, page};
use crate::pages::login_form::LoginForm;
use crate::state::AppState;

use folio_core::{Credentials, FieldErrors};

use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    http::header::SET_COOKIE,
    response::{Html, IntoResponse, Redirect, Response},
};

/// GET /login
pub async fn login_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if session_email(&state, &headers).is_some() {
        return Redirect::to("/admin").into_response();
    }
    render_login(None, None, "").into_response()
}

/// POST /login
///
/// Validate credentials locally, then sign in. Validation failures
/// re-render with per-field messages and never reach the authenticator;
/// sign-in failures re-render with the mapped banner message.
pub async fn submit_login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Response {
    let credentials = Credentials {
        email: form.email.trim().to_string(),
        password: form.password,
    };

    if let Err(errors) = credentials.validate() {
        return render_login(None, Some(&errors), &credentials.email).into_response();
    }

    match state
        .authenticator
        .sign_in_with_password(&credentials.email, &credentials.password)
    {
        Ok(session) => {
            log::info!("Operator signed in: {}", credentials.email);
            let cookie = session_cookie(&state.cookie_name, &session);
            ([(SET_COOKIE, cookie)], Redirect::to("/admin")).into_response()
        }
        Err(e) => {
            log::error!("Sign-in failed ({}): {}", e.code(), e);
            render_login(Some(sign_in_failure_message(&e)), None, &credentials.email)
                .into_response()
        }
    }
}

/// POST /logout
pub async fn logout(State(state): State<AppState>) -> Response {
    let cookie = clear_session_cookie(&state.cookie_name);
    ([(SET_COOKIE, cookie)], Redirect::to("/login")).into_response()
}

fn render_login(
    banner: Option<&str>,
    errors: Option<&FieldErrors>,
    email_value: &str,
) -> Html<String> {
    let banner_html = match banner {
        Some(message) => format!(
            r#"<div class="banner-error">{}</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    };

    let body = format!(
        r#"<div class="card" style="max-width: 28rem; margin: 4rem auto;">
<h1>Admin Dashboard</h1>
<p class="muted">Enter your credentials to access the admin panel</p>
{banner_html}
<form method="post" action="/login">
<label for="email">Email address</label>
<input id="email" name="email" type="email" autocomplete="email" placeholder="admin@company.com" value="{email}">
{email_error}
<label for="password">Password</label>
<input id="password" name="password" type="password" autocomplete="current-password" placeholder="••••••••">
{password_error}
<button type="submit">Sign in to dashboard</button>
</form>
<p class="muted" style="font-size: 0.75rem; text-align: center;">Protected area. Unauthorized access is prohibited.</p>
</div>"#,
        banner_html = banner_html,
        email = escape_html(email_value),
        email_error = field_error(errors, "email"),
        password_error = field_error(errors, "password"),
    );

    page("Admin Dashboard", &body)
}
