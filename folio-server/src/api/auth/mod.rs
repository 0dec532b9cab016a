pub mod auth;
pub mod session_cookie;
pub mod sign_in_request;
pub mod sign_in_response;
