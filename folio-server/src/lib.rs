pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod pages;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::{sign_in, sign_in_failure_message, sign_out},
        session_cookie::{clear_session_cookie, session_cookie},
        sign_in_request::SignInRequest,
        sign_in_response::SignInResponse,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::session_user::SessionUser,
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{create_project, delete_project, list_projects},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
