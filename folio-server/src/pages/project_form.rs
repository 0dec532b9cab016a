//! Raw dashboard form submission mapped into a draft.

use folio_core::{ProjectData, ProjectDraft, Testimonial, derive_slug};

use serde::Deserialize;

/// Flat form fields as posted by the dashboard's create form.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub title: String,
    /// Derived from the title when left blank
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// One skill per line
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub testimonial_content: String,
    #[serde(default)]
    pub testimonial_author: String,
    #[serde(default)]
    pub testimonial_role: String,
}

impl ProjectForm {
    /// Collect the flat fields into a structured draft.
    pub fn to_draft(&self) -> ProjectDraft {
        let slug = if self.slug.trim().is_empty() {
            derive_slug(&self.title)
        } else {
            self.slug.trim().to_string()
        };

        // Preserve insertion order, drop blanks and duplicates
        let mut skills: Vec<String> = Vec::new();
        for line in self.skills.lines() {
            let skill = line.trim();
            if !skill.is_empty() && !skills.iter().any(|s| s == skill) {
                skills.push(skill.to_string());
            }
        }

        let role = self.testimonial_role.trim();

        ProjectDraft {
            slug,
            data: ProjectData {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                skills,
                testimonial: Testimonial {
                    content: self.testimonial_content.trim().to_string(),
                    author: self.testimonial_author.trim().to_string(),
                    role: if role.is_empty() {
                        None
                    } else {
                        Some(role.to_string())
                    },
                },
            },
        }
    }
}
