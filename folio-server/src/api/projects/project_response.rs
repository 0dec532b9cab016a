use crate::ProjectDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: ProjectDto,
}
