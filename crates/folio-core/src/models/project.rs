//! Project entity - a persisted portfolio entry.

use crate::ProjectData;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project row as read back from the store. `id` and `created_at`
/// are generated by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    /// URL-safe identifier, used as a path segment
    pub slug: String,
    pub data: ProjectData,
    pub created_at: DateTime<Utc>,
}
