pub mod models;
pub mod slug;
pub mod validation;

pub use models::credentials::Credentials;
pub use models::project::Project;
pub use models::project_data::ProjectData;
pub use models::project_draft::ProjectDraft;
pub use models::testimonial::Testimonial;
pub use slug::derive_slug;
pub use validation::FieldErrors;

#[cfg(test)]
mod tests;
