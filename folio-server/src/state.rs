use folio_auth::{Authenticator, SessionValidator};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub authenticator: Arc<Authenticator>,
    pub sessions: Arc<SessionValidator>,
    /// Name of the session cookie
    pub cookie_name: String,
}
