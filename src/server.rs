//! HTTP server initialization and runtime setup.
//!
//! Opens the record store, builds the service graph, and runs the Axum server
//! until a shutdown signal arrives.

use crate::application::services::BusinessService;
use crate::config::{Config, StoreBackend};
use crate::domain::generator::SnapshotGenerator;
use crate::domain::repositories::BusinessRepository;
use crate::infrastructure::persistence::{InMemoryBusinessRepository, PgBusinessRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::random::ThreadRandom;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Creates the PostgreSQL pool from configuration.
///
/// Every connection carries a server-side `statement_timeout`, and pool
/// acquisition is bounded by `DB_CONNECT_TIMEOUT`, so no store call waits
/// indefinitely.
///
/// # Errors
///
/// Returns an error if the URL is missing or invalid, or the database is unreachable.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let options: PgConnectOptions = config
        .require_database_url()?
        .parse()
        .context("Invalid DATABASE_URL")?;

    let options = options.options([(
        "statement_timeout",
        format!("{}ms", config.db_statement_timeout_ms),
    )]);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout)))
        .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime)))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Builds the business service over a repository with the production RNG.
pub fn build_service(repository: Arc<dyn BusinessRepository>) -> BusinessService {
    BusinessService::new(repository, SnapshotGenerator::new(Arc::new(ThreadRandom)))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Record store (PostgreSQL pool with migrations, or in-memory)
/// - Business service
/// - Axum HTTP server with graceful shutdown
///
/// The pool is closed after the server stops.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (repository, pool): (Arc<dyn BusinessRepository>, Option<PgPool>) =
        match config.store_backend {
            StoreBackend::Postgres => {
                let pool = connect_pool(&config).await?;
                tracing::info!("Connected to database");

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                tracing::info!("Migrations applied");

                let repository: Arc<dyn BusinessRepository> =
                    Arc::new(PgBusinessRepository::new(Arc::new(pool.clone())));
                (repository, Some(pool))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; records are lost on shutdown");
                let repository: Arc<dyn BusinessRepository> =
                    Arc::new(InMemoryBusinessRepository::new());
                (repository, None)
            }
        };

    let state = AppState::new(Arc::new(build_service(repository)));

    let app = app_router(state, config.behind_proxy, &config.cors_allow_origins);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
