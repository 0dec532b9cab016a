//! Session-gated dashboard: the project creation form.

use crate::api::extractors::session_user::session_email;
use crate::pages::layout::{escape_html, field_error, page};
use crate::pages::project_form::ProjectForm;
use crate::state::AppState;

use folio_core::FieldErrors;
use folio_db::ProjectRepository;

use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};

enum Banner {
    Success(&'static str),
    Error(&'static str),
}

/// GET /admin
pub async fn dashboard_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if session_email(&state, &headers).is_none() {
        return Redirect::to("/login").into_response();
    }
    render_form(&ProjectForm::default(), None, None).into_response()
}

/// POST /admin/projects
///
/// Validate the draft and insert it. Validation failures re-render the
/// form with per-field messages; store failures collapse to one generic
/// banner and are logged, never re-raised.
pub async fn submit_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ProjectForm>,
) -> Response {
    let Some(operator) = session_email(&state, &headers) else {
        return Redirect::to("/login").into_response();
    };

    let draft = form.to_draft();

    if let Err(errors) = draft.validate() {
        log::debug!("Project form validation failed: {}", errors);
        return render_form(
            &form,
            Some(&errors),
            Some(Banner::Error("Please check the form for errors")),
        )
        .into_response();
    }

    let repo = ProjectRepository::new(state.pool.clone());
    match repo.insert(&draft).await {
        Ok(project) => {
            log::info!(
                "Project '{}' created by {} (id {})",
                project.slug,
                operator,
                project.id
            );
            render_form(
                &ProjectForm::default(),
                None,
                Some(Banner::Success("Project created successfully")),
            )
            .into_response()
        }
        Err(e) => {
            log::error!("Error creating project: {}", e);
            render_form(
                &form,
                None,
                Some(Banner::Error("An error occurred while creating the project")),
            )
            .into_response()
        }
    }
}

fn render_form(form: &ProjectForm, errors: Option<&FieldErrors>, banner: Option<Banner>) -> Html<String> {
    let banner_html = match banner {
        Some(Banner::Success(message)) => {
            format!(r#"<div class="banner-success">{}</div>"#, escape_html(message))
        }
        Some(Banner::Error(message)) => {
            format!(r#"<div class="banner-error">{}</div>"#, escape_html(message))
        }
        None => String::new(),
    };

    let body = format!(
        r#"<div class="card">
<h1>Create New Project</h1>
<p class="muted">Add a new project to your portfolio with details and skills</p>
{banner_html}
<form method="post" action="/admin/projects">
<label for="title">Project Title</label>
<input id="title" name="title" placeholder="My Awesome Project" value="{title}">
{title_error}
<label for="slug">URL Slug</label>
<input id="slug" name="slug" placeholder="my-project-slug" value="{slug}">
<p class="muted" style="font-size: 0.8rem; margin: -0.75rem 0 1rem;">Leave blank to derive from the title. Used in the URL: /projects/{slug_preview}</p>
{slug_error}
<label for="description">Description</label>
<textarea id="description" name="description" rows="5" placeholder="Describe your project...">{description}</textarea>
{description_error}
<label for="skills">Skills Used (one per line)</label>
<textarea id="skills" name="skills" rows="4" placeholder="Rust&#10;SQLite">{skills}</textarea>
{skills_error}
<h3>Testimonial</h3>
<label for="testimonial_content">Client Feedback</label>
<textarea id="testimonial_content" name="testimonial_content" rows="3" placeholder="What the client said about this project...">{testimonial_content}</textarea>
{testimonial_content_error}
<label for="testimonial_author">Author Name</label>
<input id="testimonial_author" name="testimonial_author" placeholder="John Smith" value="{testimonial_author}">
{testimonial_author_error}
<label for="testimonial_role">Author Role</label>
<input id="testimonial_role" name="testimonial_role" placeholder="CEO at Company" value="{testimonial_role}">
<button type="submit">Create Project</button>
</form>
<form method="post" action="/logout" style="margin-top: 1rem;">
<button type="submit" style="background: #64748b;">Sign out</button>
</form>
</div>"#,
        banner_html = banner_html,
        title = escape_html(&form.title),
        title_error = field_error(errors, "data.title"),
        slug = escape_html(&form.slug),
        slug_preview = if form.slug.is_empty() {
            "my-project-slug".to_string()
        } else {
            escape_html(&form.slug)
        },
        slug_error = field_error(errors, "slug"),
        description = escape_html(&form.description),
        description_error = field_error(errors, "data.description"),
        skills = escape_html(&form.skills),
        skills_error = field_error(errors, "data.skills"),
        testimonial_content = escape_html(&form.testimonial_content),
        testimonial_content_error = field_error(errors, "data.testimonial.content"),
        testimonial_author = escape_html(&form.testimonial_author),
        testimonial_author_error = field_error(errors, "data.testimonial.author"),
        testimonial_role = escape_html(&form.testimonial_role),
    );

    page("Create New Project", &body)
}
