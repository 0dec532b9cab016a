use crate::{api, health, pages, state::AppState};

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

async fn root_redirect() -> Redirect {
    Redirect::to("/projects")
}

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(root_redirect))
        .route(
            "/login",
            get(pages::login::login_page).post(pages::login::submit_login),
        )
        .route("/logout", post(pages::login::logout))
        .route("/admin", get(pages::dashboard::dashboard_page))
        .route("/admin/projects", post(pages::dashboard::submit_project))
        .route("/projects", get(pages::projects::projects_page))
        // REST API
        .route("/api/v1/auth/sign-in", post(api::auth::auth::sign_in))
        .route("/api/v1/auth/sign-out", post(api::auth::auth::sign_out))
        .route(
            "/api/v1/projects",
            get(api::projects::projects::list_projects).post(api::projects::projects::create_project),
        )
        .route(
            "/api/v1/projects/{id}",
            delete(api::projects::projects::delete_project),
        )
        // Health check endpoint
        .route("/health", get(health::health))
        // Add shared state
        .with_state(state)
        // CORS middleware for the JSON API
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
