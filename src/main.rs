//! taskql server entry point.
//!
//! Loads configuration from the environment, installs tracing, wires the
//! task service to `PostgreSQL` (or the in-memory store when `DATABASE_URL`
//! is unset) and serves the GraphQL API until interrupted.

use std::sync::Arc;

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use taskql::api::{graphql::build_schema, routes::create_router};
use taskql::config::AppConfig;
use taskql::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    services::{TaskOperations, TaskService},
};
use taskql::telemetry::init_tracing;
use tokio::net::TcpListener;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format)?;

    let operations = build_operations(&config).await?;
    let router = create_router(build_schema(operations));

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!(%address, "taskql listening; GraphQL at /graphql");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("taskql stopped");
    Ok(())
}

async fn build_operations(config: &AppConfig) -> Result<Arc<dyn TaskOperations>, BoxError> {
    let clock = Arc::new(DefaultClock);
    let Some(database_url) = config.database_url.clone() else {
        tracing::warn!("DATABASE_URL is not set; tasks are kept in memory only");
        let repository = Arc::new(InMemoryTaskRepository::new());
        return Ok(Arc::new(TaskService::new(repository, clock)));
    };

    let pool_size = config.database_pool_size;
    let pool = tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(pool_size)
            .build(ConnectionManager::<PgConnection>::new(database_url))
    })
    .await??;
    tracing::info!(pool_size, "connected to PostgreSQL");

    let repository = Arc::new(PostgresTaskRepository::new(pool));
    Ok(Arc::new(TaskService::new(repository, clock)))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
