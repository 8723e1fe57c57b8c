use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::AppConfig;
use crate::db::DatabaseHandle;
use crate::router::create_router;
use crate::schemas::AppState;

/// Starts the API without touching the database; the first request opens it.
pub async fn serve(config: AppConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("Fintrack application starting up");
    debug!("Database URL: {}", config.database_url);

    let db = DatabaseHandle::new(config.database_url.clone(), config.auto_migrate);
    run_server(&config, db).await
}

/// Binds `config.bind_address` and serves until interrupted.
pub(crate) async fn run_server(config: &AppConfig, db: DatabaseHandle) -> Result<()> {
    let bind_address = &config.bind_address;
    debug!("Bind address: {}", bind_address);

    trace!("Creating application router");
    let app = create_router(AppState { db }, config.request_timeout());
    debug!("Router created successfully");

    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Fintrack API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
