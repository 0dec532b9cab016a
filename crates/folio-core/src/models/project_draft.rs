//! Draft project as submitted by the dashboard form, prior to insertion.

use crate::{FieldErrors, ProjectData};

use serde::{Deserialize, Serialize};

/// A project pending insertion. Validation mirrors the dashboard form
/// schema: errors are keyed by field path so each form control can show
/// its own message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub slug: String,
    pub data: ProjectData,
}

impl ProjectDraft {
    /// Validate all field-level constraints.
    ///
    /// Returns the full error tree rather than failing fast, so every
    /// offending field gets its message in one pass.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.data.title.chars().count() < 3 {
            errors.add("data.title", "Title must be at least 3 characters");
        }
        if self.data.description.chars().count() < 10 {
            errors.add(
                "data.description",
                "Description must be at least 10 characters",
            );
        }
        if self.data.skills.is_empty() {
            errors.add("data.skills", "Add at least one skill");
        }
        if self.data.testimonial.content.chars().count() < 10 {
            errors.add(
                "data.testimonial.content",
                "Testimonial must be at least 10 characters",
            );
        }
        if self.data.testimonial.author.chars().count() < 2 {
            errors.add("data.testimonial.author", "Author name is required");
        }

        if self.slug.chars().count() < 3 {
            errors.add("slug", "Slug must be at least 3 characters");
        }
        if !self.slug.is_empty() && !is_valid_slug(&self.slug) {
            errors.add(
                "slug",
                "Slug can only contain lowercase letters, numbers, and hyphens",
            );
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn is_valid_slug(slug: &str) -> bool {
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
