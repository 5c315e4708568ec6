use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;
use usuarios::config::DEFAULT_LOG_FILTER;
use usuarios::infrastructure::Database;
use usuarios::lifecycle::{Application, shutdown_signal};
use usuarios::{AppConfig, ConfigService, app_module};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_service(&ConfigService::from_env())?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting usuarios server...");

    let database = Database::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;
    let container = app_module::build_container(&database)?;

    let app = Application::builder()
        .container(container)
        .register_lifecycle(Arc::new(RwLock::new(database)), "Database")
        .init_timeout(Duration::from_secs(30))
        .build()
        .await
        .context("failed to initialize application")?;

    let router = app_module::build_router(app.container())?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Initiating graceful shutdown...");
    app.shutdown().await?;
    tracing::info!("Server stopped");
    Ok(())
}
