//! Project REST API handlers
//!
//! Listing is public; create and delete require a session.

use crate::{
    ApiError, ApiResult, AppState, CreateProjectRequest, DeleteResponse, ProjectDto,
    ProjectListResponse, ProjectResponse, SessionUser,
};

use folio_core::{ProjectDraft, derive_slug};
use folio_db::ProjectRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/projects
///
/// List all projects, most recently created first
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<ProjectListResponse>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.find_all().await?;

    Ok(Json(ProjectListResponse {
        projects: projects.into_iter().map(ProjectDto::from).collect(),
    }))
}

/// POST /api/v1/projects
///
/// Validate and insert a new project
pub async fn create_project(
    SessionUser(operator): SessionUser,
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let slug = match request.slug {
        Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
        _ => derive_slug(&request.data.title),
    };

    let draft = ProjectDraft {
        slug,
        data: request.data,
    };

    if let Err(errors) = draft.validate() {
        let field = errors.iter().next().map(|(path, _)| path.to_string());
        return Err(ApiError::Validation {
            message: errors.to_string(),
            field,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = ProjectRepository::new(state.pool.clone());
    let project = match repo.insert(&draft).await {
        Ok(project) => project,
        Err(e) => {
            // All store errors collapse to one user-facing message
            log::error!("Error creating project: {}", e);
            return Err(ApiError::Internal {
                message: "An error occurred while creating the project".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    log::info!(
        "Project '{}' created by {} (id {})",
        project.slug,
        operator,
        project.id
    );

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            project: project.into(),
        }),
    ))
}

/// DELETE /api/v1/projects/{id}
///
/// Delete a project by id. Exposed as an API capability only; no page
/// links to it.
pub async fn delete_project(
    SessionUser(operator): SessionUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let deleted = repo.delete_by_id(id).await?;

    if !deleted {
        return Err(ApiError::NotFound {
            message: format!("Project {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Project {} deleted by {}", id, operator);

    Ok(Json(DeleteResponse { deleted }))
}
