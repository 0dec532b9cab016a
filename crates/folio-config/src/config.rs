use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, RateLimitConfig,
    ServerConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for FOLIO_CONFIG_DIR env var, else use ./.folio/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FOLIO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FOLIO_CONFIG_DIR env var > ./.folio/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("FOLIO_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".folio"))
    }

    /// Apply FOLIO_* environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("FOLIO_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("FOLIO_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
        }
        if let Ok(path) = std::env::var("FOLIO_DATABASE_PATH") {
            self.database.path = path;
        }
        if let Ok(secret) = std::env::var("FOLIO_SESSION_SECRET") {
            self.auth.session_secret = Some(secret);
        }
        if let Ok(email) = std::env::var("FOLIO_ADMIN_EMAIL") {
            self.auth.admin_email = Some(email);
        }
        if let Ok(hash) = std::env::var("FOLIO_ADMIN_PASSWORD_HASH") {
            self.auth.admin_password_hash = Some(hash);
        }
        if let Ok(level) = std::env::var("FOLIO_LOG_LEVEL") {
            // FromStr never fails
            self.logging.level = crate::LogLevel::from_str(&level).unwrap();
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.rate_limit.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log a startup summary without secrets.
    pub fn log_summary(&self) {
        info!("Server: {}", self.bind_address());
        info!("Database: {}", self.database.path);
        info!(
            "Sessions: cookie '{}', ttl {}s",
            self.auth.cookie_name, self.auth.session_ttl_secs
        );
        info!(
            "Sign-in rate limit: {} requests per {}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
    }
}
