//! banchan-api - HTTP server for banchan tag search

use tracing::info;

use banchan_api::config::ApiConfig;
use banchan_api::http::{router, AppState};
use banchan_api::telemetry::init_tracing;
use banchan_db::{log_pool_metrics, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;
    let _file_guard = init_tracing(&config.log);

    info!(
        log_format = ?config.log.format,
        log_file = config.log.file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    // Connections open per request; the server starts even if the database is down
    let db = Database::connect_lazy(&config.database_url, config.pool.clone())?;
    let app = router(AppState::new(db.tags.clone()));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        subsystem = "api",
        op = "listen",
        addr = %addr,
        max_connections = config.pool.max_connections,
        "banchan-api listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_pool_metrics(db.pool());
    db.pool().close().await;
    info!(subsystem = "api", op = "shutdown", "banchan-api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
