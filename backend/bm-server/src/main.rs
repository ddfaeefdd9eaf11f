use bm_auth::JwtValidator;
use bm_config::Config;
use bm_core::{User, UserId};
use bm_server::{AppState, build_router, error::ServerError, logger};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| ServerError::Io {
            message: format!("Failed to create log directory {}", log_dir.display()),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting bm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    info!("Running database migrations...");
    bm_db::migrate(&pool).await?;
    info!("Migrations complete");

    let jwt_validator = match config.auth.jwt_secret.as_deref() {
        Some(secret) if config.auth.enabled => {
            let validator = JwtValidator::with_hs256(secret.as_bytes());
            info!("JWT: {} authentication enabled", validator.algorithm());
            Some(Arc::new(validator))
        }
        _ => {
            warn!("Authentication DISABLED - running in development mode");
            None
        }
    };

    let app_state = AppState {
        pool,
        jwt_validator,
        dev_user: User::new(
            UserId(config.auth.dev_user_id),
            config.auth.dev_username.clone(),
        ),
        name_policy: config.bookmarks.name_policy(),
    };

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
