use crate::Testimonial;

use serde::{Deserialize, Serialize};

/// Structured payload of a project entry. Stored whole in the `data`
/// column of the projects table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectData {
    pub title: String,
    pub description: String,
    /// Insertion order is preserved for display.
    pub skills: Vec<String>,
    pub testimonial: Testimonial,
}
