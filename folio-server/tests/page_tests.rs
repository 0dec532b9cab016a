//! Integration tests for the server-rendered pages
mod common;

use crate::common::{
    TEST_ADMIN_PASSWORD, create_test_app_state, insert_project, sign_in_cookie,
};

use folio_server::build_router;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_request(uri: &str, cookie: Option<&str>, form_body: String) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form_body)).unwrap()
}

// =============================================================================
// Login page
// =============================================================================

#[tokio::test]
async fn test_login_page_renders() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/login")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Admin Dashboard"));
    assert!(body.contains("Enter your credentials to access the admin panel"));
    assert!(body.contains("Sign in to dashboard"));
}

#[tokio::test]
async fn test_login_page_redirects_when_signed_in() {
    let state = create_test_app_state().await;
    let cookie = sign_in_cookie(&state).await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/login")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin");
}

#[tokio::test]
async fn test_submit_login_success_redirects_to_admin() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let form = format!(
        "email=admin%40company.com&password={}",
        TEST_ADMIN_PASSWORD
    );
    let response = app.oneshot(form_request("/login", None, form)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin");

    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("folio_session="));
    assert!(set_cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_submit_login_wrong_password_shows_banner() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let form = "email=admin%40company.com&password=not-the-password".to_string();
    let response = app.oneshot(form_request("/login", None, form)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Invalid credentials."));
    // Re-renders the form with the email preserved
    assert!(body.contains(r#"value="admin@company.com""#));
}

#[tokio::test]
async fn test_submit_login_validation_errors_inline() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let form = "email=not-an-email&password=short".to_string();
    let response = app.oneshot(form_request("/login", None, form)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Invalid email address"));
    assert!(body.contains("Password must be at least 6 characters"));
}

// =============================================================================
// Admin dashboard
// =============================================================================

#[tokio::test]
async fn test_admin_redirects_without_session() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/admin")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn test_admin_renders_create_form_with_session() {
    let state = create_test_app_state().await;
    let cookie = sign_in_cookie(&state).await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/admin")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Create New Project"));
    assert!(body.contains(r#"name="title""#));
    assert!(body.contains(r#"name="testimonial_author""#));
}

#[tokio::test]
async fn test_submit_project_form_success() {
    let state = create_test_app_state().await;
    let cookie = sign_in_cookie(&state).await;
    let app = build_router(state.clone());

    // Skills are one per line in the textarea
    let form = "title=Client+Portal&slug=&description=A+full+portal+for+client+onboarding\
&skills=Rust%0AAxum%0ASQLite\
&testimonial_content=Outstanding+work+from+start+to+finish.\
&testimonial_author=Jane+Doe&testimonial_role=CTO"
        .to_string();

    let response = app
        .oneshot(form_request("/admin/projects", Some(&cookie), form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Project created successfully"));

    // Slug was derived from the title
    let app = build_router(state.clone());
    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/projects")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let json: serde_json::Value =
        serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(json["projects"][0]["slug"], "client-portal");
}

#[tokio::test]
async fn test_submit_project_form_validation_errors() {
    let state = create_test_app_state().await;
    let cookie = sign_in_cookie(&state).await;
    let app = build_router(state.clone());

    let form = "title=ab&slug=&description=short&skills=\
&testimonial_content=&testimonial_author=&testimonial_role="
        .to_string();

    let response = app
        .oneshot(form_request("/admin/projects", Some(&cookie), form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Please check the form for errors"));
    assert!(body.contains("Title must be at least 3 characters"));
    assert!(body.contains("Description must be at least 10 characters"));
    assert!(body.contains("Add at least one skill"));
    assert!(body.contains("Testimonial must be at least 10 characters"));
    assert!(body.contains("Author name is required"));
}

#[tokio::test]
async fn test_submit_project_redirects_without_session() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let form = "title=Client+Portal".to_string();
    let response = app
        .oneshot(form_request("/admin/projects", None, form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

// =============================================================================
// Public listing
// =============================================================================

#[tokio::test]
async fn test_root_redirects_to_projects() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/projects");
}

#[tokio::test]
async fn test_projects_page_empty_state() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/projects")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("No projects found"));
    assert!(body.contains("Check back soon for new additions to our portfolio."));
}

#[tokio::test]
async fn test_projects_page_renders_cards() {
    let state = create_test_app_state().await;
    insert_project(&state.pool, "client-portal", "Client Portal", 1_000).await;

    let app = build_router(state.clone());
    let request = Request::builder()
        .method("GET")
        .uri("/projects")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Client Portal"));
    assert!(body.contains("Jane Doe"));
    assert!(!body.contains("No projects found"));
}

#[tokio::test]
async fn test_projects_page_escapes_html() {
    let state = create_test_app_state().await;
    insert_project(&state.pool, "xss-project", "<script>alert(1)</script>", 1_000).await;

    let app = build_router(state.clone());
    let request = Request::builder()
        .method("GET")
        .uri("/projects")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = body_string(response).await;

    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}
