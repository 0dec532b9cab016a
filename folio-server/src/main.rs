use folio_auth::{Authenticator, RateLimitConfig, SessionSigner, SessionValidator};
use folio_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = folio_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = folio_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting folio-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/folio-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Session token signing and verification share the configured secret
    let (Some(secret), Some(admin_email), Some(admin_password_hash)) = (
        config.auth.session_secret.clone(),
        config.auth.admin_email.clone(),
        config.auth.admin_password_hash.clone(),
    ) else {
        return Err(folio_config::ConfigError::auth(
            "auth configuration incomplete after validation",
        )
        .into());
    };

    let signer = SessionSigner::new(secret.as_bytes(), config.auth.session_ttl_secs);
    let sessions = Arc::new(SessionValidator::with_hs256(secret.as_bytes()));

    let authenticator = Arc::new(Authenticator::new(
        admin_email,
        admin_password_hash,
        signer,
        RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        },
    ));
    info!("Authenticator initialized");

    // Build application state
    let app_state = AppState {
        pool,
        authenticator,
        sessions,
        cookie_name: config.auth.cookie_name.clone(),
    };

    // Build router
    let app = build_router(app_state);

    // Bind and serve
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to install shutdown handler: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
