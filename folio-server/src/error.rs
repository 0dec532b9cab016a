use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] folio_config::ConfigError),

    #[error("Database error: {0}")]
    Db(#[from] folio_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
