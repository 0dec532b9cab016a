use folio_core::{ProjectData, ProjectDraft, Testimonial};

/// A valid draft with a caller-chosen slug and title.
pub fn draft(slug: &str, title: &str) -> ProjectDraft {
    ProjectDraft {
        slug: slug.to_string(),
        data: ProjectData {
            title: title.to_string(),
            description: "A portfolio entry used by repository tests.".to_string(),
            skills: vec!["Rust".to_string(), "SQLite".to_string()],
            testimonial: Testimonial {
                content: "Great collaboration from start to finish.".to_string(),
                author: "Jane Doe".to_string(),
                role: Some("CTO".to_string()),
            },
        },
    }
}
