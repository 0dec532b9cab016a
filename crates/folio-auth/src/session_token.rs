/// An issued session token, ready to be set as a cookie.
#[derive(Debug, Clone)]
pub struct SessionToken {
    /// Signed JWT
    pub token: String,
    /// Cookie lifetime in seconds
    pub max_age_secs: u64,
}
