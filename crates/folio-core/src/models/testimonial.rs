use serde::{Deserialize, Serialize};

/// Client testimonial attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub content: String,
    pub author: String,
    /// Author's role, e.g. "CEO at Company"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
