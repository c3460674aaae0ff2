//! # pothubd, the pothub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`pothub.toml` + env overrides)
//! - Initialize logging
//! - Open the `SQLite` connection pool and run migrations; refuse to serve
//!   if the database is unreachable
//! - Construct repository implementations (adapters)
//! - Construct the application service, injecting repositories via port traits
//! - Build the axum router, bind to a TCP port, and serve
//! - Shut down gracefully on SIGTERM/SIGINT and close the pool
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use pothub_adapter_http_axum::state::AppState;
use pothub_adapter_storage_sqlite_sqlx::{
    SqliteAuditLog, SqliteDeviceRepository, SqlitePotRepository, SqliteSensorRepository,
};
use pothub_app::services::resource_service::ResourceService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = pothub_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
        max_connections: config.database.max_connections,
    }
    .build()
    .await
    .inspect_err(|err| tracing::error!(error = %err, "failed to open database"))?;
    let pool = db.pool().clone();

    // Repositories
    let sensor_repo = SqliteSensorRepository::new(pool.clone());
    let device_repo = SqliteDeviceRepository::new(pool.clone());
    let pot_repo = SqlitePotRepository::new(pool.clone());
    let audit_log = SqliteAuditLog::new(pool);

    // Services
    let resource_service = ResourceService::new(sensor_repo, device_repo, pot_repo, audit_log);

    // HTTP
    let state = AppState::new(resource_service);
    let app = pothub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "pothubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("database closed, bye");

    Ok(())
}

/// Resolve when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutting down server");
}
