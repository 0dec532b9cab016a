use folio_core::ProjectData;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// URL slug; derived from the title when omitted
    #[serde(default)]
    pub slug: Option<String>,

    /// Structured project payload
    pub data: ProjectData,
}
