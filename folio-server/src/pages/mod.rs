pub mod dashboard;
pub mod layout;
pub mod login;
pub mod login_form;
pub mod project_form;
pub mod projects;
