//! Server binary: reads configuration from the environment, connects to
//! PostgreSQL, and serves the API until ctrl-c.

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use warehouse_api::{build_router, ensure_database_exists, ensure_schema, AppConfig, AppState, PgExecutor};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warehouse_api=info")))
        .init();

    let config = AppConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    if config.bootstrap_schema {
        ensure_schema(&pool).await?;
    }

    let state = AppState::new(Arc::new(PgExecutor::new(pool)), config.request_timeout);
    let shutdown = state.shutdown.clone();
    let app = build_router(state, config.body_limit_bytes);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

/// Resolves on ctrl-c after cancelling the root token, which aborts
/// in-flight store calls of every request.
async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
    shutdown.cancel();
}
