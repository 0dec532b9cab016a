use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    /// Signed-in operator email
    pub email: String,
}
