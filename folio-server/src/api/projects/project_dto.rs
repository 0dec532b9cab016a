use folio_core::{Project, ProjectData};

use serde::Serialize;

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: i64,
    pub slug: String,
    pub data: ProjectData,
    pub created_at: i64,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            slug: p.slug,
            data: p.data,
            created_at: p.created_at.timestamp(),
        }
    }
}
