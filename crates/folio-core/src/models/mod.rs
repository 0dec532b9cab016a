pub mod credentials;
pub mod project;
pub mod project_data;
pub mod project_draft;
pub mod testimonial;
